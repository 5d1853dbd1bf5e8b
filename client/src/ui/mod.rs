pub mod connection_form;
pub mod log_line;
pub mod log_search;
pub mod logs_page;
pub mod viewport;
pub mod virtual_list;

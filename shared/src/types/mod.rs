pub mod api_config;
pub mod log_entry;
pub mod log_level;
pub mod log_message;

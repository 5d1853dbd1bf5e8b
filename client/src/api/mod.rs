pub mod client;
pub mod controller;
pub mod error;
pub mod feed;

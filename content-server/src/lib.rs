pub mod api;
pub mod config;
pub mod content;
pub mod identifier;
pub mod prometheus;
pub mod router;
pub mod server;
pub mod time;

pub mod config;
pub mod credential;
pub mod error;
pub mod host;
pub mod resolve;

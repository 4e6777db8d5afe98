//! Infrastructure layer with external service adapters.

/// Account API client.
pub mod api;
/// Application configuration.
pub mod config;

pub use api::HttpAuthClient;
pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};

// 3rd party crates
use config::ConfigError;
use thiserror::Error;

// Project imports
use crate::providers::cloudflare::errors::CloudflareValidationError;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid log level: {0}. Must be one of: error, warn, info, debug, trace")]
    InvalidLogLevel(String),
    #[error("Cloudflare configuration error: {0}")]
    CloudflareConfig(#[from] CloudflareValidationError),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),
}

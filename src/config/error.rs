//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Request timeout of {request_secs}s must exceed the AI and mail budget of {required_secs}s")]
    RequestTimeoutTooShort { request_secs: u64, required_secs: u64 },

    #[error("Invalid server address: {0}")]
    InvalidAddress(String),

    #[error("AI model identifier cannot be empty")]
    MissingAiModel,

    #[error("Invalid AI base URL: {0}")]
    InvalidAiBaseUrl(String),

    #[error("SMTP host cannot be empty")]
    MissingSmtpHost,

    #[error("Invalid operator email address")]
    InvalidOperatorEmail,
}

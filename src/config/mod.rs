//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SMART_CORNER` prefix and nested values use double underscores as separators.
//!
//! The flat variables of earlier deployments (`API_KEY`, `GEMINI_API_KEY`,
//! `SMTP_HOST`, `SMTP_USER`, `SMTP_PASS`) are still honoured, with lower
//! precedence than their prefixed equivalents.
//!
//! # Example
//!
//! ```no_run
//! use smart_corner::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod ai;
mod email;
mod error;
mod server;

pub use ai::AiConfig;
pub use email::EmailConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::Deserialize;

/// Flat environment variables mapped onto config keys. Later entries win.
const LEGACY_ENV: [(&str, &str); 5] = [
    ("ai.api_key", "GEMINI_API_KEY"),
    ("ai.api_key", "API_KEY"),
    ("email.smtp_host", "SMTP_HOST"),
    ("email.smtp_user", "SMTP_USER"),
    ("email.smtp_pass", "SMTP_PASS"),
];

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Text-generation provider configuration
    #[serde(default)]
    pub ai: AiConfig,

    /// Mail delivery configuration
    #[serde(default)]
    pub email: EmailConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Seeds defaults from the flat legacy variables
    /// 3. Reads environment variables with `SMART_CORNER` prefix
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SMART_CORNER__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `SMART_CORNER__AI__API_KEY=...` -> `ai.api_key = ...`
    /// - `SMART_CORNER__EMAIL__SMTP_HOST=...` -> `email.smtp_host = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let builder = with_legacy_env(config::Config::builder())?;
        let config = builder
            .add_source(
                config::Environment::with_prefix("SMART_CORNER")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        self.email.validate()?;

        // The summary call and both sends must finish inside one request.
        let required_secs = self.ai.timeout_secs + 2 * self.email.timeout_secs;
        if self.server.request_timeout_secs <= required_secs {
            return Err(ValidationError::RequestTimeoutTooShort {
                request_secs: self.server.request_timeout_secs,
                required_secs,
            });
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

fn with_legacy_env(
    mut builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
    for (key, var) in LEGACY_ENV {
        if let Ok(value) = std::env::var(var) {
            if !value.is_empty() {
                builder = builder.set_default(key, value)?;
            }
        }
    }
    Ok(builder)
}

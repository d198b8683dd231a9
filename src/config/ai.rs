//! AI provider configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// AI provider configuration
///
/// A missing API key is a valid configuration: summaries fall back to a
/// placeholder instead of calling the provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Gemini API key
    pub api_key: Option<Secret<String>>,

    /// Model identifier
    pub model: String,

    /// Override for the Gemini API base URL
    pub base_url: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The configured API key, if present and non-empty
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_ref()
            .map(|k| k.expose_secret().as_str())
            .filter(|k| !k.trim().is_empty())
    }

    /// Check if a text-generation credential is configured
    pub fn has_credential(&self) -> bool {
        self.credential().is_some()
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.model.trim().is_empty() {
            return Err(ValidationError::MissingAiModel);
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        if let Some(url) = &self.base_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidAiBaseUrl(url.clone()));
            }
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-3-flash-preview".to_string(),
            base_url: None,
            timeout_secs: 25,
        }
    }
}

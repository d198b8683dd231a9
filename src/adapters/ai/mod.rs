//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port for the text-generation service.
//!
//! ## Available Adapters
//!
//! - `GeminiProvider` - Google Gemini `generateContent` API
//! - `MockAIProvider` - Configurable mock for testing

mod gemini_provider;
mod mock_provider;

pub use gemini_provider::{GeminiConfig, GeminiProvider};
pub use mock_provider::{MockAIProvider, MockError, MockResponse};

use std::sync::Arc;
use std::time::Duration;

use crate::config::AiConfig;
use crate::ports::{AIError, AIProvider};

/// Builds the configured provider, or `None` when no credential is set.
pub fn provider_from_config(config: &AiConfig) -> Result<Option<Arc<dyn AIProvider>>, AIError> {
    let Some(api_key) = config.credential() else {
        return Ok(None);
    };

    let mut gemini = GeminiConfig::new(api_key)
        .with_model(&config.model)
        .with_timeout(config.timeout());
    if let Some(url) = &config.base_url {
        gemini = gemini.with_base_url(url);
    }
    let provider: Arc<dyn AIProvider> = Arc::new(GeminiProvider::new(gemini)?);
    Ok(Some(provider))
}

/// Maps a failed reqwest send to an AIError.
pub(crate) fn map_transport_error(err: reqwest::Error, timeout: Duration) -> AIError {
    if err.is_timeout() {
        AIError::Timeout {
            timeout_secs: timeout.as_secs() as u32,
        }
    } else if err.is_connect() {
        AIError::network(format!("Connection failed: {}", err))
    } else {
        AIError::network(err.to_string())
    }
}

/// Maps a non-success HTTP status and its body to an AIError.
pub(crate) fn map_status_error(status: u16, body: String) -> AIError {
    match status {
        401 | 403 => AIError::AuthenticationFailed,
        429 => AIError::RateLimited,
        400 | 404 => AIError::InvalidRequest(body),
        500..=599 => AIError::unavailable(format!("Server error {}: {}", status, body)),
        _ => AIError::network(format!("Unexpected status {}: {}", status, body)),
    }
}

//! Gemini Provider - Implementation of AIProvider for Google's Generative Language API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(api_key)
//!     .with_model("gemini-3-flash-preview")
//!     .with_timeout(Duration::from_secs(30));
//!
//! let provider = GeminiProvider::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{map_status_error, map_transport_error};
use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, MessageRole,
    ProviderInfo, TokenUsage,
};

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    api_key: Secret<String>,
    /// Model to use (e.g., "gemini-3-flash-preview").
    pub model: String,
    /// Base URL for the API (default: https://generativelanguage.googleapis.com/v1beta).
    pub base_url: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gemini-3-flash-preview".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Gemini API provider implementation.
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    pub fn new(config: GeminiConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::unavailable(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    /// Converts our request to Gemini's format.
    fn to_gemini_request(request: &CompletionRequest) -> GeminiRequest {
        let contents = request
            .messages
            .iter()
            .map(|m| GeminiContent {
                role: Some(
                    match m.role {
                        MessageRole::Assistant => "model",
                        MessageRole::System | MessageRole::User => "user",
                    }
                    .to_string(),
                ),
                parts: vec![GeminiPart {
                    text: Some(m.content.clone()),
                }],
            })
            .collect();

        GeminiRequest { contents }
    }

    async fn handle_response_status(response: Response) -> Result<Response, AIError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let error_body = response.text().await.unwrap_or_default();
        Err(map_status_error(status.as_u16(), error_body))
    }

    fn parse_response(&self, body: GeminiResponse) -> Result<CompletionResponse, AIError> {
        let usage = body
            .usage_metadata
            .map(|u| TokenUsage::new(u.prompt_token_count, u.candidates_token_count))
            .unwrap_or_default();
        let model = body.model_version.unwrap_or_else(|| self.config.model.clone());

        let Some(candidate) = body.candidates.into_iter().next() else {
            if let Some(reason) = body.prompt_feedback.and_then(|f| f.block_reason) {
                return Err(AIError::content_filtered(reason));
            }
            return Ok(CompletionResponse {
                content: String::new(),
                usage,
                model,
                finish_reason: FinishReason::Stop,
            });
        };

        let finish_reason = match candidate.finish_reason.as_deref() {
            Some("MAX_TOKENS") => FinishReason::Length,
            Some("SAFETY") | Some("RECITATION") | Some("BLOCKLIST") | Some("PROHIBITED_CONTENT") => {
                FinishReason::ContentFilter
            }
            _ => FinishReason::Stop,
        };

        let content = candidate
            .content
            .map(|c| {
                c.parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        Ok(CompletionResponse {
            content,
            usage,
            model,
            finish_reason,
        })
    }
}

#[async_trait]
impl AIProvider for GeminiProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let gemini_request = Self::to_gemini_request(&request);

        let response = self
            .client
            .post(self.generate_url())
            .header("x-goog-api-key", self.config.api_key())
            .header("Content-Type", "application/json")
            .json(&gemini_request)
            .send()
            .await
            .map_err(|e| map_transport_error(e, self.config.timeout))?;

        let response = Self::handle_response_status(response).await?;
        let body: GeminiResponse = response
            .json()
            .await
            .map_err(|e| AIError::parse(format!("Failed to parse response: {}", e)))?;

        self.parse_response(body)
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("gemini", &self.config.model)
    }
}

// ----- Gemini API Types -----

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    usage_metadata: Option<GeminiUsage>,
    prompt_feedback: Option<PromptFeedback>,
    model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiUsage {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

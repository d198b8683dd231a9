//! AI Provider Port - Interface for LLM provider integrations.
//!
//! This port abstracts the text-generation service (Gemini) so the
//! summary generator can ask for a completion without coupling to a provider.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct EchoProvider;
//!
//! #[async_trait]
//! impl AIProvider for EchoProvider {
//!     async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
//!         Ok(CompletionResponse {
//!             content: request.messages[0].content.clone(),
//!             usage: TokenUsage::default(),
//!             model: "echo".to_string(),
//!             finish_reason: FinishReason::Stop,
//!         })
//!     }
//!
//!     fn provider_info(&self) -> ProviderInfo {
//!         ProviderInfo::new("echo", "echo")
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for AI/LLM provider interactions.
///
/// Calls are single-shot: implementations must not retry on failure.
#[async_trait]
pub trait AIProvider: Send + Sync {
    /// Generate a single completion.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError>;

    /// Get provider information (name, model).
    fn provider_info(&self) -> ProviderInfo;
}

/// Request for AI completion.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Conversation messages; a summary request carries one user prompt.
    pub messages: Vec<Message>,
    /// Request metadata for tracing.
    pub metadata: RequestMetadata,
}

impl CompletionRequest {
    /// Creates a new completion request with required metadata.
    pub fn new(metadata: RequestMetadata) -> Self {
        Self {
            messages: Vec::new(),
            metadata,
        }
    }

    /// Adds a message to the conversation.
    pub fn with_message(mut self, role: MessageRole, content: impl Into<String>) -> Self {
        self.messages.push(Message {
            role,
            content: content.into(),
        });
        self
    }

    /// Concatenated content of all user messages.
    pub fn user_prompt(&self) -> String {
        self.messages
            .iter()
            .filter(|m| m.role == MessageRole::User)
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// A message in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

/// Role of the message sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instructions (guides model behavior).
    System,
    /// User input.
    User,
    /// Assistant (model) response.
    Assistant,
}

/// Request metadata for tracing.
#[derive(Debug, Clone)]
pub struct RequestMetadata {
    /// Trace ID for distributed tracing (the submission id).
    pub trace_id: String,
}

impl RequestMetadata {
    pub fn new(trace_id: impl Into<String>) -> Self {
        Self {
            trace_id: trace_id.into(),
        }
    }
}

/// Response from AI completion.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Generated content; may be empty when the model produced nothing.
    pub content: String,
    pub usage: TokenUsage,
    /// Model that generated the response.
    pub model: String,
    pub finish_reason: FinishReason,
}

/// Token usage information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl TokenUsage {
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        }
    }
}

/// Reason the model stopped generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Natural stop (end of response).
    Stop,
    /// Hit the model's output token limit.
    Length,
    /// Content was filtered for safety.
    ContentFilter,
    /// An error occurred.
    Error,
}

/// Provider information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderInfo {
    /// Provider name (e.g., "gemini").
    pub name: String,
    /// Model identifier (e.g., "gemini-3-flash-preview").
    pub model: String,
}

impl ProviderInfo {
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// AI provider errors.
#[derive(Debug, thiserror::Error)]
pub enum AIError {
    /// Rate limited by provider.
    #[error("rate limited by provider")]
    RateLimited,

    /// Content was filtered for safety.
    #[error("content filtered: {reason}")]
    ContentFiltered { reason: String },

    /// Provider is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable { message: String },

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid request configuration.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u32 },
}

impl AIError {
    pub fn content_filtered(reason: impl Into<String>) -> Self {
        Self::ContentFiltered {
            reason: reason.into(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

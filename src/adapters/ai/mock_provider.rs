//! Mock AI Provider for testing.
//!
//! Provides a configurable mock implementation of the AIProvider port,
//! allowing tests to run without calling real AI APIs.
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAIProvider::new().with_response("Resumen X");
//!
//! let response = provider.complete(request).await?;
//! assert_eq!(response.content, "Resumen X");
//! assert_eq!(provider.call_count(), 1);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

/// Mock AI provider for testing.
///
/// Configurable to return specific responses, simulate delays, or inject errors.
#[derive(Debug, Clone)]
pub struct MockAIProvider {
    /// Pre-configured responses (consumed in order).
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    info: ProviderInfo,
    /// Simulated latency per request.
    delay: Duration,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success {
        content: String,
        finish_reason: FinishReason,
    },
    Error(MockError),
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    RateLimited,
    ContentFiltered { reason: String },
    Unavailable { message: String },
    AuthenticationFailed,
    Network { message: String },
    Timeout { timeout_secs: u32 },
}

impl From<MockError> for AIError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::RateLimited => AIError::RateLimited,
            MockError::ContentFiltered { reason } => AIError::content_filtered(reason),
            MockError::Unavailable { message } => AIError::unavailable(message),
            MockError::AuthenticationFailed => AIError::AuthenticationFailed,
            MockError::Network { message } => AIError::network(message),
            MockError::Timeout { timeout_secs } => AIError::Timeout { timeout_secs },
        }
    }
}

impl Default for MockAIProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAIProvider {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            info: ProviderInfo::new("mock", "mock-model-1"),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a successful response to the queue.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.push(MockResponse::Success {
            content: content.into(),
            finish_reason: FinishReason::Stop,
        })
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: MockError) -> Self {
        self.push(MockResponse::Error(error))
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_provider_info(mut self, info: ProviderInfo) -> Self {
        self.info = info;
        self
    }

    /// Returns the number of calls made to this provider.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }

    fn push(self, response: MockResponse) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    /// Gets the next response or a default.
    fn next_response(&self) -> MockResponse {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockResponse::Success {
                content: "Mock response".to_string(),
                finish_reason: FinishReason::Stop,
            })
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let prompt_tokens = (request.user_prompt().len() / 4).max(1) as u32;
        self.calls.lock().unwrap().push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_response() {
            MockResponse::Success {
                content,
                finish_reason,
            } => Ok(CompletionResponse {
                usage: TokenUsage::new(prompt_tokens, (content.len() / 4) as u32),
                content,
                model: self.info.model.clone(),
                finish_reason,
            }),
            MockResponse::Error(err) => Err(err.into()),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}

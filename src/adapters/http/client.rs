//! HTTP Briefing Submitter - reqwest client for the submission endpoint.
//!
//! Any answer the server gives is a `SubmissionResult`; only transport
//! failures and unreadable bodies are errors.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::domain::briefing::{SubmissionPayload, SubmissionResult};
use crate::ports::{BriefingSubmitter, SubmitError};

/// Path of the submission endpoint.
pub const SUBMIT_PATH: &str = "/api/send-email";

/// Submits briefings to a running server over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBriefingSubmitter {
    client: Client,
    endpoint: String,
}

impl HttpBriefingSubmitter {
    /// Creates a submitter for the server at `base_url`.
    pub fn new(base_url: impl AsRef<str>, timeout: Duration) -> Result<Self, SubmitError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SubmitError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url.as_ref().trim_end_matches('/'), SUBMIT_PATH),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Reads a server answer into a result, whatever the status.
    fn interpret(status: StatusCode, body: &[u8]) -> Result<SubmissionResult, SubmitError> {
        let mut result: SubmissionResult = serde_json::from_slice(body)
            .map_err(|e| SubmitError::InvalidResponse(format!("status {}: {}", status, e)))?;

        if !status.is_success() {
            result.success = false;
            result.ai_summary = None;
            if result.error_detail.is_none() {
                result.error_detail = Some(format!("Unexpected status {}", status));
            }
        }
        Ok(result)
    }
}

#[async_trait]
impl BriefingSubmitter for HttpBriefingSubmitter {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<SubmissionResult, SubmitError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        Self::interpret(status, &body)
    }
}

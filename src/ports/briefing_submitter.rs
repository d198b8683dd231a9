//! Briefing Submitter Port - client-side transport to the submission endpoint.

use async_trait::async_trait;

use crate::domain::briefing::{SubmissionPayload, SubmissionResult};

/// Port used by the wizard to send a finished briefing to the server.
///
/// `Ok` means the server answered, whatever it answered; `Err` means the call
/// never produced a readable response.
#[async_trait]
pub trait BriefingSubmitter: Send + Sync {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<SubmissionResult, SubmitError>;
}

/// Transport-level submission failures.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unreadable response: {0}")]
    InvalidResponse(String),
}

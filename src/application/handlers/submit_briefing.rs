//! SubmitBriefingHandler - Command handler for a submitted briefing.
//!
//! Runs summary generation and notification dispatch strictly in sequence.
//! The summary step cannot fail; the dispatch step decides the outcome.

use tracing::Instrument;

use crate::domain::briefing::SubmissionPayload;
use crate::domain::foundation::SubmissionId;

use super::notification_dispatcher::{DispatchError, NotificationDispatcher};
use super::summary_generator::SummaryGenerator;

/// Result of a delivered submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitBriefingResult {
    pub submission_id: SubmissionId,
    /// Generated summary or one of the fixed placeholders.
    pub ai_summary: String,
}

/// Handler for briefing submissions.
#[derive(Clone)]
pub struct SubmitBriefingHandler {
    summaries: SummaryGenerator,
    dispatcher: NotificationDispatcher,
}

impl SubmitBriefingHandler {
    pub fn new(summaries: SummaryGenerator, dispatcher: NotificationDispatcher) -> Self {
        Self {
            summaries,
            dispatcher,
        }
    }

    pub async fn handle(
        &self,
        payload: SubmissionPayload,
    ) -> Result<SubmitBriefingResult, DispatchError> {
        let submission_id = SubmissionId::new();
        let span = tracing::info_span!("submit_briefing", %submission_id, lang = %payload.lang);
        self.run(payload, submission_id).instrument(span).await
    }

    async fn run(
        &self,
        payload: SubmissionPayload,
        submission_id: SubmissionId,
    ) -> Result<SubmitBriefingResult, DispatchError> {
        tracing::info!(
            services = payload.briefing.services.len(),
            estimate = payload.internal_estimate,
            "Briefing submission received"
        );

        // 1. Summary (never fails)
        let ai_summary = self
            .summaries
            .generate(&payload.briefing, payload.lang, submission_id)
            .await;

        // 2. Notifications (always attempted)
        self.dispatcher
            .dispatch(
                &payload.briefing,
                payload.internal_estimate,
                &ai_summary,
                payload.lang,
                submission_id,
            )
            .await?;

        Ok(SubmitBriefingResult {
            submission_id,
            ai_summary,
        })
    }
}

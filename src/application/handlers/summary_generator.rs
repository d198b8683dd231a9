//! SummaryGenerator - turns a finished briefing into an AI-written summary.
//!
//! Never fails: every failure path yields a fixed placeholder string that is
//! shown and mailed like a real summary. The provider call runs under its own
//! time budget, which must fit inside the HTTP request timeout.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::briefing::{BriefingModel, Language};
use crate::domain::foundation::SubmissionId;
use crate::ports::{AIProvider, CompletionRequest, MessageRole, RequestMetadata};

/// Summary used when no text-generation credential is configured.
pub const SUMMARY_UNAVAILABLE: &str = "AI Summary unavailable.";

/// Summary used when the provider answered with no text.
pub const SUMMARY_EMPTY: &str = "No summary generated.";

/// Summary used when the provider call failed.
pub const SUMMARY_FAILED: &str = "Error generating AI summary, but data was saved.";

/// Time allowed for the provider call unless overridden.
pub const DEFAULT_SUMMARY_TIMEOUT: Duration = Duration::from_secs(25);

/// Generates briefing summaries through an optional AI provider.
#[derive(Clone)]
pub struct SummaryGenerator {
    provider: Option<Arc<dyn AIProvider>>,
    timeout: Duration,
}

impl SummaryGenerator {
    pub fn new(provider: Option<Arc<dyn AIProvider>>) -> Self {
        Self {
            provider,
            timeout: DEFAULT_SUMMARY_TIMEOUT,
        }
    }

    /// Generator with no provider; always returns [`SUMMARY_UNAVAILABLE`].
    pub fn disabled() -> Self {
        Self::new(None)
    }

    /// Caps how long a provider call may take before [`SUMMARY_FAILED`] is used.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the analysis prompt for a briefing.
    pub fn build_prompt(briefing: &BriefingModel, language: Language) -> String {
        format!(
            "Analyze this creative briefing and generate a professional summary in {}.\n\
             Project: {}\n\
             Description: {}\n\
             Services: {}\n\
             Budget: {}\n\
             Format: 1. Need analysis. 2. Technical recommendations. 3. Suggested next steps.",
            language.full_name(),
            briefing.details.project_name,
            briefing.details.description,
            briefing.services.join(", "),
            briefing.timeline.budget_range,
        )
    }

    /// Produces the summary text for a briefing.
    pub async fn generate(
        &self,
        briefing: &BriefingModel,
        language: Language,
        submission_id: SubmissionId,
    ) -> String {
        let Some(provider) = &self.provider else {
            tracing::info!(%submission_id, "No AI credential configured, skipping summary");
            return SUMMARY_UNAVAILABLE.to_string();
        };

        let request = CompletionRequest::new(RequestMetadata::new(submission_id.to_string()))
            .with_message(MessageRole::User, Self::build_prompt(briefing, language));

        let outcome = match tokio::time::timeout(self.timeout, provider.complete(request)).await {
            Ok(outcome) => outcome,
            Err(_) => {
                tracing::error!(
                    %submission_id,
                    provider = %provider.provider_info().name,
                    timeout_secs = self.timeout.as_secs_f64(),
                    "AI summary timed out"
                );
                return SUMMARY_FAILED.to_string();
            }
        };

        match outcome {
            Ok(response) if response.content.trim().is_empty() => {
                tracing::warn!(
                    %submission_id,
                    model = %response.model,
                    finish_reason = ?response.finish_reason,
                    "AI provider returned no text"
                );
                SUMMARY_EMPTY.to_string()
            }
            Ok(response) => {
                tracing::debug!(
                    %submission_id,
                    model = %response.model,
                    total_tokens = response.usage.total_tokens,
                    "AI summary generated"
                );
                response.content
            }
            Err(err) => {
                tracing::error!(
                    %submission_id,
                    provider = %provider.provider_info().name,
                    error = %err,
                    "AI summary generation failed"
                );
                SUMMARY_FAILED.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};

    fn briefing() -> BriefingModel {
        let mut briefing = BriefingModel::new();
        briefing.toggle_service("web-design");
        briefing.toggle_service("seo");
        briefing.details.project_name = "Tienda Online".to_string();
        briefing.details.description = "Venta de cerámica".to_string();
        briefing.timeline.budget_range = "1000€ - 3000€".to_string();
        briefing
    }

    #[test]
    fn prompt_names_language_and_fields() {
        let prompt = SummaryGenerator::build_prompt(&briefing(), Language::Es);

        assert!(prompt.starts_with(
            "Analyze this creative briefing and generate a professional summary in Spanish."
        ));
        assert!(prompt.contains("Project: Tienda Online"));
        assert!(prompt.contains("Description: Venta de cerámica"));
        assert!(prompt.contains("Services: web-design, seo"));
        assert!(prompt.contains("Budget: 1000€ - 3000€"));
        assert!(prompt.ends_with(
            "Format: 1. Need analysis. 2. Technical recommendations. 3. Suggested next steps."
        ));
    }

    #[tokio::test]
    async fn returns_provider_text() {
        let provider = Arc::new(MockAIProvider::new().with_response("Resumen X"));
        let generator = SummaryGenerator::new(Some(provider.clone()));

        let summary = generator
            .generate(&briefing(), Language::Es, SubmissionId::new())
            .await;

        assert_eq!(summary, "Resumen X");
        assert_eq!(provider.call_count(), 1);
        assert!(provider.get_calls()[0].user_prompt().contains("in Spanish."));
    }

    #[tokio::test]
    async fn tags_request_with_submission_id() {
        let provider = Arc::new(MockAIProvider::new());
        let generator = SummaryGenerator::new(Some(provider.clone()));
        let id = SubmissionId::new();

        generator.generate(&briefing(), Language::En, id).await;

        assert_eq!(provider.get_calls()[0].metadata.trace_id, id.to_string());
    }

    #[tokio::test]
    async fn missing_provider_is_unavailable() {
        let summary = SummaryGenerator::disabled()
            .generate(&briefing(), Language::En, SubmissionId::new())
            .await;
        assert_eq!(summary, SUMMARY_UNAVAILABLE);
    }

    #[tokio::test]
    async fn blank_text_is_empty_placeholder() {
        let provider = Arc::new(MockAIProvider::new().with_response("  \n "));
        let summary = SummaryGenerator::new(Some(provider))
            .generate(&briefing(), Language::En, SubmissionId::new())
            .await;
        assert_eq!(summary, SUMMARY_EMPTY);
    }

    #[tokio::test]
    async fn provider_error_is_failure_placeholder() {
        let provider = Arc::new(MockAIProvider::new().with_error(MockError::Network {
            message: "connection reset".to_string(),
        }));
        let summary = SummaryGenerator::new(Some(provider))
            .generate(&briefing(), Language::Pl, SubmissionId::new())
            .await;
        assert_eq!(summary, SUMMARY_FAILED);
    }

    #[tokio::test]
    async fn slow_provider_is_failure_placeholder() {
        let provider = Arc::new(
            MockAIProvider::new()
                .with_response("Too late")
                .with_delay(Duration::from_millis(500)),
        );
        let generator =
            SummaryGenerator::new(Some(provider.clone())).with_timeout(Duration::from_millis(50));

        let summary = generator
            .generate(&briefing(), Language::En, SubmissionId::new())
            .await;

        assert_eq!(summary, SUMMARY_FAILED);
        assert_eq!(provider.call_count(), 1);
    }

    #[test]
    fn placeholders_are_distinct_and_non_empty() {
        let all = [SUMMARY_UNAVAILABLE, SUMMARY_EMPTY, SUMMARY_FAILED];
        for (i, a) in all.iter().enumerate() {
            assert!(!a.is_empty());
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}

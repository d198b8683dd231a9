//! WizardController - owns the step machine and the briefing being collected.
//!
//! Navigation never depends on the submission outcome: once a submission
//! resolves, the wizard is on the confirmation step whether the server
//! accepted the briefing, rejected it, or could not be reached. The outcome
//! only decides what the confirmation view can show.

use tracing::{debug, warn};

use crate::domain::briefing::{
    BriefingModel, FieldUpdate, Language, ServiceCatalog, SubmissionPayload, SubmissionResult,
};
use crate::ports::{BriefingSubmitter, SubmitError};

use super::{WizardAction, WizardStep};

#[derive(Debug, Clone)]
pub struct WizardController {
    step: WizardStep,
    briefing: BriefingModel,
    language: Language,
    in_flight: bool,
    result: Option<SubmissionResult>,
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl WizardController {
    /// Fresh wizard at step 1 with an empty briefing.
    pub fn new(language: Language) -> Self {
        Self {
            step: WizardStep::Services,
            briefing: BriefingModel::new(),
            language,
            in_flight: false,
            result: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn briefing(&self) -> &BriefingModel {
        &self.briefing
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// True while a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    /// Outcome of the last submission, once resolved.
    pub fn result(&self) -> Option<&SubmissionResult> {
        self.result.as_ref()
    }

    /// Summary to display on the confirmation step, if the server returned one.
    pub fn ai_summary(&self) -> Option<&str> {
        self.result
            .as_ref()
            .and_then(|r| r.ai_summary.as_deref())
            .filter(|s| !s.is_empty())
    }

    pub fn toggle_service(&mut self, id: &str) {
        self.briefing.toggle_service(id);
    }

    pub fn update_field(&mut self, update: FieldUpdate) {
        self.briefing.apply(update);
    }

    /// Completion gate for a step, evaluated against the current briefing.
    pub fn can_advance(&self, step: WizardStep) -> bool {
        let check = match step {
            WizardStep::Services => self.briefing.validate_services(),
            WizardStep::ProjectDetails => self.briefing.validate_details(),
            WizardStep::Timeline => self.briefing.validate_timeline(),
            WizardStep::Contact => self.briefing.validate_contact(),
            WizardStep::Confirmation => return false,
        };
        check.is_ok()
    }

    /// Whether the "next" control is enabled on the current step.
    pub fn can_advance_current(&self) -> bool {
        !self.in_flight && self.can_advance(self.step)
    }

    /// Price estimate for the current selection, recomputed on every call.
    pub fn estimate(&self) -> u32 {
        ServiceCatalog::global().estimate(&self.briefing.services)
    }

    /// Moves forward one step.
    ///
    /// On steps 1-3 this is a plain transition when the gate is open. On
    /// step 4 it submits the briefing and lands on the confirmation step once
    /// the call resolves. Anything else is a no-op.
    pub async fn advance(&mut self, submitter: &dyn BriefingSubmitter) -> WizardStep {
        if self.step == WizardStep::Contact {
            if let Some(payload) = self.begin_submission() {
                let outcome = submitter.submit(&payload).await;
                self.complete_submission(outcome);
            }
            return self.step;
        }

        if self.can_advance(self.step) {
            if let Some(next) = self.step.apply(WizardAction::Next) {
                self.step = next;
            }
        }
        self.step
    }

    /// Moves back one step; no-op on the first and the terminal step.
    pub fn retreat(&mut self) -> WizardStep {
        if self.in_flight {
            return self.step;
        }
        if let Some(prev) = self.step.apply(WizardAction::Back) {
            self.step = prev;
        }
        self.step
    }

    /// Freezes the briefing into a payload and marks a submission in flight.
    ///
    /// Returns `None` when not on the contact step, when the gate is closed,
    /// or when a submission is already in flight.
    pub fn begin_submission(&mut self) -> Option<SubmissionPayload> {
        if self.step != WizardStep::Contact || self.in_flight {
            debug!(step = ?self.step, in_flight = self.in_flight, "Submission suppressed");
            return None;
        }
        if !self.can_advance(WizardStep::Contact) {
            return None;
        }
        self.in_flight = true;
        Some(SubmissionPayload {
            briefing: self.briefing.clone(),
            internal_estimate: self.estimate(),
            lang: self.language,
        })
    }

    /// Records the outcome of the in-flight submission and moves to the
    /// confirmation step, whatever the outcome.
    pub fn complete_submission(&mut self, outcome: Result<SubmissionResult, SubmitError>) {
        if !self.in_flight {
            return;
        }
        self.in_flight = false;
        let result = match outcome {
            Ok(result) => result,
            Err(err) => {
                warn!(error = %err, "Submission error");
                SubmissionResult::failed(err.to_string())
            }
        };
        self.result = Some(result);
        if let Some(next) = self.step.apply(WizardAction::SubmissionResolved) {
            self.step = next;
        }
    }

    /// Discards everything and starts over at step 1, keeping the language.
    pub fn reset(&mut self) {
        *self = Self::new(self.language);
    }
}

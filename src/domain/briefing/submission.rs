//! Wire shapes of a single briefing submission.

use serde::{Deserialize, Deserializer, Serialize};

use super::{BriefingModel, Language};

/// Body of the submission call: the briefing plus estimate and language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    #[serde(flatten)]
    pub briefing: BriefingModel,
    /// Estimate computed by the wizard, in whole euros.
    #[serde(default, deserialize_with = "lenient_estimate")]
    pub internal_estimate: u32,
    #[serde(default)]
    pub lang: Language,
}

/// Reads any JSON number as whole euros; null, negative or non-finite values become 0.
fn lenient_estimate<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value
        .filter(|v| v.is_finite() && *v > 0.0)
        .map_or(0, |v| v.round() as u32))
}

/// Outcome of one submission attempt as seen by the wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
    /// Server error message, or the transport error when the call never completed.
    #[serde(default, rename = "error", skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
}

impl SubmissionResult {
    pub fn succeeded(ai_summary: impl Into<String>) -> Self {
        Self {
            success: true,
            ai_summary: Some(ai_summary.into()),
            error_detail: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            ai_summary: None,
            error_detail: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_flattens_briefing_sections() {
        let mut briefing = BriefingModel::new();
        briefing.toggle_service("web-design");
        let payload = SubmissionPayload {
            briefing,
            internal_estimate: 500,
            lang: Language::Es,
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["services"], json!(["web-design"]));
        assert_eq!(value["internalEstimate"], json!(500));
        assert_eq!(value["lang"], json!("es"));
        assert!(value["details"].is_object());
        assert!(value.get("briefing").is_none());
    }

    #[test]
    fn payload_defaults_missing_estimate_and_language() {
        let payload: SubmissionPayload = serde_json::from_value(json!({
            "services": ["seo"],
            "details": {"projectName": "Atlas", "description": "Shop"},
            "timeline": {"deadline": "ASAP", "budgetRange": "< 1k"},
            "contact": {"fullName": "Ana", "email": "ana@example.com", "gdprConsent": true}
        }))
        .unwrap();
        assert_eq!(payload.internal_estimate, 0);
        assert_eq!(payload.lang, Language::En);
        assert_eq!(payload.briefing.services, vec!["seo"]);
    }

    #[test]
    fn payload_accepts_null_language_and_fractional_estimate() {
        let payload: SubmissionPayload = serde_json::from_value(json!({
            "services": ["seo"],
            "internalEstimate": 500.0,
            "lang": null
        }))
        .unwrap();
        assert_eq!(payload.internal_estimate, 500);
        assert_eq!(payload.lang, Language::En);

        let payload: SubmissionPayload =
            serde_json::from_value(json!({"internalEstimate": 849.6, "lang": "pl"})).unwrap();
        assert_eq!(payload.internal_estimate, 850);
        assert_eq!(payload.lang, Language::Pl);
    }

    #[test]
    fn payload_treats_null_or_negative_estimate_as_zero() {
        let payload: SubmissionPayload =
            serde_json::from_value(json!({"internalEstimate": null})).unwrap();
        assert_eq!(payload.internal_estimate, 0);

        let payload: SubmissionPayload =
            serde_json::from_value(json!({"internalEstimate": -20})).unwrap();
        assert_eq!(payload.internal_estimate, 0);
    }

    #[test]
    fn result_reads_server_error_body() {
        let result: SubmissionResult =
            serde_json::from_value(json!({"error": "Failed to send email."})).unwrap();
        assert!(!result.success);
        assert!(result.ai_summary.is_none());
        assert_eq!(result.error_detail.as_deref(), Some("Failed to send email."));
    }

    #[test]
    fn result_reads_success_body() {
        let result: SubmissionResult =
            serde_json::from_value(json!({"success": true, "aiSummary": "Resumen"})).unwrap();
        assert_eq!(result, SubmissionResult::succeeded("Resumen"));
    }
}

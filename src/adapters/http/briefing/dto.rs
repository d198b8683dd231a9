//! Data Transfer Objects for the briefing endpoints.
//!
//! The request body is the domain `SubmissionPayload` itself; these types
//! cover the responses.

use serde::{Deserialize, Serialize};

/// Body of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitBriefingResponse {
    pub success: bool,
    pub ai_summary: String,
}

impl SubmitBriefingResponse {
    pub fn delivered(ai_summary: impl Into<String>) -> Self {
        Self {
            success: true,
            ai_summary: ai_summary.into(),
        }
    }
}

/// Error body: a single human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Liveness probe body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_body_uses_camel_case() {
        let body = serde_json::to_value(SubmitBriefingResponse::delivered("Resumen X")).unwrap();
        assert_eq!(body, json!({"success": true, "aiSummary": "Resumen X"}));
    }

    #[test]
    fn error_body_has_single_field() {
        let body = serde_json::to_value(ErrorResponse::new("Method not allowed")).unwrap();
        assert_eq!(body, json!({"error": "Method not allowed"}));
    }
}

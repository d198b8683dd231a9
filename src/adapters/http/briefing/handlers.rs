//! HTTP handlers for the briefing endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::handlers::{DispatchError, SubmitBriefingHandler};
use crate::domain::briefing::SubmissionPayload;

use super::dto::{ErrorResponse, HealthResponse, SubmitBriefingResponse};

/// Message returned for any method other than POST.
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";

/// Message returned when notifications could not be delivered.
pub const DELIVERY_FAILED_MESSAGE: &str = "Failed to send email. Check SMTP settings.";

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the briefing routes.
#[derive(Clone)]
pub struct BriefingAppState {
    pub submit_handler: SubmitBriefingHandler,
}

impl BriefingAppState {
    pub fn new(submit_handler: SubmitBriefingHandler) -> Self {
        Self { submit_handler }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error that converts to an HTTP response.
#[derive(Debug)]
pub enum BriefingApiError {
    MalformedBody(String),
    Delivery(DispatchError),
}

impl From<DispatchError> for BriefingApiError {
    fn from(err: DispatchError) -> Self {
        BriefingApiError::Delivery(err)
    }
}

impl From<JsonRejection> for BriefingApiError {
    fn from(rejection: JsonRejection) -> Self {
        BriefingApiError::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for BriefingApiError {
    fn into_response(self) -> Response {
        match self {
            BriefingApiError::MalformedBody(message) => {
                tracing::warn!(error = %message, "Rejected malformed briefing body");
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response()
            }
            BriefingApiError::Delivery(err) => {
                tracing::error!(error = %err, "Briefing submission failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new(DELIVERY_FAILED_MESSAGE)),
                )
                    .into_response()
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/send-email - Summarize a briefing and send the notifications
pub async fn submit_briefing(
    State(state): State<BriefingAppState>,
    payload: Result<Json<SubmissionPayload>, JsonRejection>,
) -> Result<impl IntoResponse, BriefingApiError> {
    let Json(payload) = payload?;
    let result = state.submit_handler.handle(payload).await?;
    Ok(Json(SubmitBriefingResponse::delivered(result.ai_summary)))
}

/// Fallback for non-POST methods on /api/send-email
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::new(METHOD_NOT_ALLOWED_MESSAGE)),
    )
}

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

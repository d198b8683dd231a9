//! Axum router configuration for the briefing endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{health, method_not_allowed, submit_briefing, BriefingAppState};

/// Create the briefing router.
///
/// # Routes
/// - `POST /api/send-email` - Submit a briefing (any other method gets 405)
/// - `GET /health` - Liveness probe
pub fn briefing_router() -> Router<BriefingAppState> {
    Router::new()
        .route(
            "/api/send-email",
            post(submit_briefing).fallback(method_not_allowed),
        )
        .route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mail::MockMailTransport;
    use crate::application::handlers::{
        DispatchSettings, NotificationDispatcher, SubmitBriefingHandler, SummaryGenerator,
    };
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(transport: &MockMailTransport) -> Router {
        let handler = SubmitBriefingHandler::new(
            SummaryGenerator::disabled(),
            NotificationDispatcher::new(
                Arc::new(transport.clone()),
                DispatchSettings {
                    from_header: "\"The Smart Corner\" <onboarding@resend.dev>".to_string(),
                    operator_email: "ops@example.com".to_string(),
                },
            ),
        );
        briefing_router().with_state(BriefingAppState::new(handler))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let response = app(&MockMailTransport::new())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn put_is_method_not_allowed() {
        let transport = MockMailTransport::new();
        let response = app(&transport)
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/send-email")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body_json(response).await["error"], "Method not allowed");
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let transport = MockMailTransport::new();
        let response = app(&transport)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/send-email")
                    .header("content-type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["error"].is_string());
        assert_eq!(transport.call_count(), 0);
    }
}

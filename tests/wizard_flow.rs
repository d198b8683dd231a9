//! Wizard walk-through tests.
//!
//! Drive the WizardController from an empty briefing to the confirmation
//! step, submitting over real HTTP to a server running on a local port.

use std::sync::Arc;
use std::time::Duration;

use smart_corner::adapters::ai::MockAIProvider;
use smart_corner::adapters::http::{briefing_router, BriefingAppState, HttpBriefingSubmitter};
use smart_corner::adapters::mail::MockMailTransport;
use smart_corner::application::handlers::{
    DispatchSettings, NotificationDispatcher, SubmitBriefingHandler, SummaryGenerator,
};
use smart_corner::domain::briefing::{FieldUpdate, Language};
use smart_corner::domain::wizard::{WizardController, WizardStep};
use smart_corner::ports::AIProvider;

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Starts the briefing server on an ephemeral port and returns its base URL.
async fn spawn_server(provider: Arc<MockAIProvider>, transport: &MockMailTransport) -> String {
    let handler = SubmitBriefingHandler::new(
        SummaryGenerator::new(Some(provider as Arc<dyn AIProvider>)),
        NotificationDispatcher::new(
            Arc::new(transport.clone()),
            DispatchSettings {
                from_header: "\"The Smart Corner\" <onboarding@resend.dev>".to_string(),
                operator_email: "operator@example.com".to_string(),
            },
        ),
    );
    let app = briefing_router().with_state(BriefingAppState::new(handler));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Base URL of a port nothing listens on.
async fn dead_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

fn submitter(base_url: &str) -> HttpBriefingSubmitter {
    HttpBriefingSubmitter::new(base_url, Duration::from_secs(5)).unwrap()
}

/// Fills steps 1-3 and the contact step, advancing as it goes.
async fn fill_to_contact(wizard: &mut WizardController, submitter: &HttpBriefingSubmitter) {
    wizard.toggle_service("branding");
    wizard.toggle_service("seo");
    assert_eq!(wizard.advance(submitter).await, WizardStep::ProjectDetails);

    wizard.update_field(FieldUpdate::ProjectName("Café Luna".to_string()));
    wizard.update_field(FieldUpdate::Description("Rebranding de cafetería".to_string()));
    assert_eq!(wizard.advance(submitter).await, WizardStep::Timeline);

    let pack = wizard.language().pack();
    wizard.update_field(FieldUpdate::Deadline(pack.deadlines[1].to_string()));
    wizard.update_field(FieldUpdate::BudgetRange(pack.budget_ranges[0].to_string()));
    assert_eq!(wizard.advance(submitter).await, WizardStep::Contact);

    wizard.update_field(FieldUpdate::FullName("Marta Ruiz".to_string()));
    wizard.update_field(FieldUpdate::Email("marta@example.com".to_string()));
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn full_walk_through_reaches_confirmation_with_summary() {
    let provider = Arc::new(MockAIProvider::new().with_response("Resumen de marca"));
    let transport = MockMailTransport::new();
    let base_url = spawn_server(provider.clone(), &transport).await;
    let submitter = submitter(&base_url);

    let mut wizard = WizardController::new(Language::Es);
    fill_to_contact(&mut wizard, &submitter).await;
    assert_eq!(wizard.estimate(), 750);

    // Consent gate holds the wizard on the contact step.
    assert!(!wizard.can_advance_current());
    assert_eq!(wizard.advance(&submitter).await, WizardStep::Contact);
    assert_eq!(provider.call_count(), 0);

    wizard.update_field(FieldUpdate::GdprConsent(true));
    assert_eq!(wizard.advance(&submitter).await, WizardStep::Confirmation);

    assert!(!wizard.is_submitting());
    assert_eq!(wizard.ai_summary(), Some("Resumen de marca"));
    assert!(wizard.result().unwrap().success);

    let sent = transport.sent();
    assert_eq!(sent.len(), 2);
    assert!(sent[0].body.content().contains("Cálculo Base Interno: ~750€"));
    assert!(sent[0].body.content().contains("Branding, SEO"));
    assert_eq!(sent[1].to, "marta@example.com");
}

#[tokio::test]
async fn server_side_failure_still_reaches_confirmation() {
    let provider = Arc::new(MockAIProvider::new().with_response("Resumen"));
    let transport = MockMailTransport::new().failing_on(1);
    let base_url = spawn_server(provider, &transport).await;
    let submitter = submitter(&base_url);

    let mut wizard = WizardController::new(Language::En);
    fill_to_contact(&mut wizard, &submitter).await;
    wizard.update_field(FieldUpdate::GdprConsent(true));

    assert_eq!(wizard.advance(&submitter).await, WizardStep::Confirmation);

    let result = wizard.result().unwrap();
    assert!(!result.success);
    assert_eq!(
        result.error_detail.as_deref(),
        Some("Failed to send email. Check SMTP settings.")
    );
    assert_eq!(wizard.ai_summary(), None);
}

#[tokio::test]
async fn unreachable_server_still_reaches_confirmation() {
    let submitter = submitter(&dead_endpoint().await);

    let mut wizard = WizardController::new(Language::Pl);
    fill_to_contact(&mut wizard, &submitter).await;
    wizard.update_field(FieldUpdate::GdprConsent(true));

    assert_eq!(wizard.advance(&submitter).await, WizardStep::Confirmation);
    assert!(!wizard.result().unwrap().success);
    assert_eq!(wizard.ai_summary(), None);

    // Terminal: no way back, only a reset.
    assert_eq!(wizard.retreat(), WizardStep::Confirmation);
    wizard.reset();
    assert_eq!(wizard.step(), WizardStep::Services);
    assert_eq!(wizard.language(), Language::Pl);
    assert!(wizard.briefing().services.is_empty());
}

#[tokio::test]
async fn back_navigation_keeps_entered_data() {
    let submitter = submitter(&dead_endpoint().await);

    let mut wizard = WizardController::new(Language::En);
    fill_to_contact(&mut wizard, &submitter).await;

    assert_eq!(wizard.retreat(), WizardStep::Timeline);
    assert_eq!(wizard.retreat(), WizardStep::ProjectDetails);
    assert_eq!(wizard.retreat(), WizardStep::Services);
    assert_eq!(wizard.retreat(), WizardStep::Services);

    assert_eq!(wizard.briefing().details.project_name, "Café Luna");
    assert_eq!(wizard.briefing().contact.email, "marta@example.com");

    // Deselecting every service closes the first gate again.
    wizard.toggle_service("branding");
    wizard.toggle_service("seo");
    assert_eq!(wizard.advance(&submitter).await, WizardStep::Services);
    assert_eq!(wizard.estimate(), 0);
}

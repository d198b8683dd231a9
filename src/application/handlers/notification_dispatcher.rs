//! NotificationDispatcher - sends the operator notification and the client
//! confirmation for a submitted briefing.
//!
//! The operator email goes first. If it fails the client email is not
//! attempted, so a client is never told "received" for a briefing the
//! operator never saw.

use std::sync::Arc;

use crate::domain::briefing::{BriefingModel, Language, ServiceCatalog};
use crate::domain::foundation::SubmissionId;
use crate::ports::{EmailBody, MailError, MailTransport, OutgoingEmail};

/// Brand appended to client-facing subjects.
const BRAND: &str = "The Smart Corner";

/// Shown in the operator email when the client left company blank.
const COMPANY_NOT_GIVEN: &str = "No indicada";

/// Which of the two notifications failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipient {
    Operator,
    Client,
}

impl std::fmt::Display for Recipient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Recipient::Operator => write!(f, "operator"),
            Recipient::Client => write!(f, "client"),
        }
    }
}

/// Failure to deliver one of the notifications.
#[derive(Debug, thiserror::Error)]
#[error("{recipient} notification failed: {source}")]
pub struct DispatchError {
    pub recipient: Recipient,
    #[source]
    pub source: MailError,
}

/// Sender identity and operator mailbox.
#[derive(Debug, Clone)]
pub struct DispatchSettings {
    /// Full `From` header value.
    pub from_header: String,
    pub operator_email: String,
}

/// Dispatches the two notification emails over a mail transport.
#[derive(Clone)]
pub struct NotificationDispatcher {
    transport: Arc<dyn MailTransport>,
    settings: DispatchSettings,
}

impl NotificationDispatcher {
    pub fn new(transport: Arc<dyn MailTransport>, settings: DispatchSettings) -> Self {
        Self {
            transport,
            settings,
        }
    }

    /// Sends the operator notification, then the client confirmation.
    pub async fn dispatch(
        &self,
        briefing: &BriefingModel,
        estimate: u32,
        summary: &str,
        language: Language,
        submission_id: SubmissionId,
    ) -> Result<(), DispatchError> {
        let operator = self.operator_email(briefing, estimate, summary);
        self.send(operator, Recipient::Operator, submission_id).await?;

        let client = self.client_email(briefing, language);
        self.send(client, Recipient::Client, submission_id).await?;

        tracing::info!(%submission_id, "Briefing notifications delivered");
        Ok(())
    }

    async fn send(
        &self,
        email: OutgoingEmail,
        recipient: Recipient,
        submission_id: SubmissionId,
    ) -> Result<(), DispatchError> {
        self.transport.send(email).await.map_err(|source| {
            tracing::error!(
                %submission_id,
                %recipient,
                error = %source,
                "Mail delivery failed"
            );
            DispatchError { recipient, source }
        })
    }

    /// Operator notification with the full briefing, summary and estimate.
    pub fn operator_email(
        &self,
        briefing: &BriefingModel,
        estimate: u32,
        summary: &str,
    ) -> OutgoingEmail {
        let contact = &briefing.contact;
        let company = if contact.company.trim().is_empty() {
            COMPANY_NOT_GIVEN.to_string()
        } else {
            escape_html(&contact.company)
        };

        let mut html = String::new();
        html.push_str(
            "<div style=\"font-family: sans-serif; background: #0f172a; color: #f8fafc; \
             padding: 40px; border-radius: 20px;\">",
        );
        html.push_str(&format!(
            "<h1 style=\"color: #8b5cf6;\">Briefing de: {}</h1>",
            escape_html(&contact.full_name)
        ));
        html.push_str(&format!("<p><strong>Empresa:</strong> {}</p>", company));
        html.push_str(&format!(
            "<p><strong>Email Cliente:</strong> {}</p>",
            escape_html(&contact.email)
        ));
        if !contact.phone.trim().is_empty() {
            html.push_str(&format!(
                "<p><strong>Teléfono:</strong> {}</p>",
                escape_html(&contact.phone)
            ));
        }
        html.push_str(&format!(
            "<p><strong>Servicios:</strong> {}</p>",
            escape_html(&ServiceCatalog::global().display_names(&briefing.services))
        ));
        html.push_str(&format!(
            "<p><strong>Plazo:</strong> {}</p>",
            escape_html(&briefing.timeline.deadline)
        ));
        html.push_str(&format!(
            "<p><strong>Rango Presupuesto:</strong> {}</p>",
            escape_html(&briefing.timeline.budget_range)
        ));
        html.push_str("<hr style=\"border: 1px solid #1e293b; margin: 30px 0;\"/>");
        html.push_str("<h2 style=\"color: #ec4899;\">Resumen IA:</h2>");
        html.push_str(&format!(
            "<div style=\"background: #1e293b; padding: 25px; border-radius: 15px; \
             font-style: italic; line-height: 1.6;\">{}</div>",
            escape_html(summary).replace('\n', "<br/>")
        ));
        html.push_str(&format!(
            "<p style=\"font-size: 11px; color: #64748b; margin-top: 25px; text-align: right;\">\
             Cálculo Base Interno: ~{}€</p>",
            estimate
        ));
        html.push_str("</div>");

        OutgoingEmail {
            from: self.settings.from_header.clone(),
            to: self.settings.operator_email.clone(),
            subject: format!("🚀 Nuevo Proyecto: {}", briefing.details.project_name),
            body: EmailBody::Html(html),
        }
    }

    /// Plain-text confirmation in the client's language.
    pub fn client_email(&self, briefing: &BriefingModel, language: Language) -> OutgoingEmail {
        let pack = language.pack();
        OutgoingEmail {
            from: self.settings.from_header.clone(),
            to: briefing.contact.email.clone(),
            subject: format!("{} - {}", pack.confirmation_subject, BRAND),
            body: EmailBody::Text(pack.confirmation_text(
                &briefing.contact.full_name,
                &briefing.details.project_name,
            )),
        }
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mail::MockMailTransport;

    fn settings() -> DispatchSettings {
        DispatchSettings {
            from_header: "\"The Smart Corner\" <onboarding@resend.dev>".to_string(),
            operator_email: "ops@example.com".to_string(),
        }
    }

    fn briefing() -> BriefingModel {
        let mut briefing = BriefingModel::new();
        briefing.toggle_service("web-design");
        briefing.toggle_service("branding");
        briefing.details.project_name = "Café Luna".to_string();
        briefing.details.description = "Nueva identidad".to_string();
        briefing.timeline.deadline = "1 mes".to_string();
        briefing.timeline.budget_range = "1.000€ - 3.000€".to_string();
        briefing.contact.full_name = "Ana García".to_string();
        briefing.contact.email = "ana@example.com".to_string();
        briefing.contact.gdpr_consent = true;
        briefing
    }

    fn dispatcher(transport: &MockMailTransport) -> NotificationDispatcher {
        NotificationDispatcher::new(Arc::new(transport.clone()), settings())
    }

    #[tokio::test]
    async fn sends_operator_then_client() {
        let transport = MockMailTransport::new();

        dispatcher(&transport)
            .dispatch(&briefing(), 900, "Resumen X", Language::Es, SubmissionId::new())
            .await
            .unwrap();

        let sent = transport.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].to, "ops@example.com");
        assert_eq!(sent[0].subject, "🚀 Nuevo Proyecto: Café Luna");
        assert_eq!(sent[1].to, "ana@example.com");
        assert_eq!(sent[1].subject, "Briefing Recibido - The Smart Corner");
        assert!(sent[1].body.content().starts_with("Hola Ana García"));
    }

    #[tokio::test]
    async fn operator_failure_skips_client_email() {
        let transport = MockMailTransport::new().failing_on(1);

        let err = dispatcher(&transport)
            .dispatch(&briefing(), 900, "Resumen X", Language::Es, SubmissionId::new())
            .await
            .unwrap_err();

        assert_eq!(err.recipient, Recipient::Operator);
        assert_eq!(transport.call_count(), 1);
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn client_failure_is_reported() {
        let transport = MockMailTransport::new().failing_on(2);

        let err = dispatcher(&transport)
            .dispatch(&briefing(), 900, "Resumen X", Language::En, SubmissionId::new())
            .await
            .unwrap_err();

        assert_eq!(err.recipient, Recipient::Client);
        assert_eq!(transport.call_count(), 2);
    }

    #[test]
    fn operator_body_carries_details() {
        let email = dispatcher(&MockMailTransport::new()).operator_email(
            &briefing(),
            900,
            "Línea 1\nLínea 2",
        );

        assert!(email.body.is_html());
        let body = email.body.content();
        assert!(body.contains("Briefing de: Ana García"));
        assert!(body.contains("Empresa:</strong> No indicada"));
        assert!(body.contains("Email Cliente:</strong> ana@example.com"));
        assert!(body.contains("Servicios:</strong> Web Design, Branding"));
        assert!(body.contains("Rango Presupuesto:</strong> 1.000€ - 3.000€"));
        assert!(body.contains("Línea 1<br/>Línea 2"));
        assert!(body.contains("Cálculo Base Interno: ~900€"));
        assert!(!body.contains("Teléfono"));
    }

    #[test]
    fn operator_body_escapes_user_input() {
        let mut briefing = briefing();
        briefing.contact.full_name = "<script>alert(1)</script>".to_string();
        briefing.contact.company = "A & B".to_string();

        let email = dispatcher(&MockMailTransport::new()).operator_email(&briefing, 0, "ok");
        let body = email.body.content();

        assert!(body.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(body.contains("A &amp; B"));
        assert!(!body.contains("<script>"));
    }

    #[test]
    fn client_email_falls_back_to_english_text() {
        let email = dispatcher(&MockMailTransport::new()).client_email(&briefing(), Language::En);
        assert_eq!(email.subject, "Briefing Received - The Smart Corner");
        assert!(!email.body.is_html());
        assert!(email.body.content().starts_with("Hi Ana García"));
    }
}

//! SMTP Mail Transport - lettre-backed implementation of MailTransport.
//!
//! Connects with implicit TLS (port 465 by default). Credentials are resolved
//! once from [`EmailConfig`]; when they are incomplete the transport is still
//! constructed and every send fails with `MailError::MissingCredentials`.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

use crate::config::EmailConfig;
use crate::ports::{EmailBody, MailError, MailTransport, OutgoingEmail};

/// SMTP reply code for rejected credentials.
const AUTH_FAILED_CODE: &str = "535";

/// Connection settings resolved from configuration.
#[derive(Debug, Clone)]
pub struct MailSettings {
    pub host: String,
    pub port: u16,
    pub user: Option<String>,
    password: Option<Secret<String>>,
    pub timeout: Duration,
}

impl MailSettings {
    /// Resolves host, port and credentials, applying the managed-host rules.
    pub fn resolve(config: &EmailConfig) -> Self {
        Self {
            host: config.smtp_host.clone(),
            port: config.smtp_port,
            user: config.auth_user().map(str::to_string),
            password: config.auth_password().map(|p| Secret::new(p.to_string())),
            timeout: config.timeout(),
        }
    }

    /// Name of the first missing credential, if any.
    pub fn missing_credential(&self) -> Option<&'static str> {
        if self.user.is_none() {
            Some("SMTP_USER")
        } else if self.password.is_none() {
            Some("SMTP_PASS")
        } else {
            None
        }
    }

    fn credentials(&self) -> Option<Credentials> {
        let user = self.user.clone()?;
        let password = self.password.as_ref()?.expose_secret().clone();
        Some(Credentials::new(user, password))
    }
}

/// SMTP transport.
pub struct SmtpMailTransport {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    missing_credential: Option<&'static str>,
}

impl SmtpMailTransport {
    /// Builds the transport; only a TLS setup failure is an error here.
    pub fn new(settings: &MailSettings) -> Result<Self, MailError> {
        let missing_credential = settings.missing_credential();
        let Some(credentials) = settings.credentials() else {
            tracing::warn!(
                host = %settings.host,
                missing = missing_credential.unwrap_or_default(),
                "SMTP credentials incomplete, every send will fail"
            );
            return Ok(Self {
                transport: None,
                missing_credential,
            });
        };

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)
            .map_err(|e| MailError::Connection(e.to_string()))?
            .port(settings.port)
            .credentials(credentials)
            .timeout(Some(settings.timeout))
            .build();

        Ok(Self {
            transport: Some(transport),
            missing_credential,
        })
    }

    /// Renders an OutgoingEmail into a lettre message.
    fn build_message(email: &OutgoingEmail) -> Result<Message, MailError> {
        let from: Mailbox = email
            .from
            .parse()
            .map_err(|e: lettre::address::AddressError| {
                MailError::invalid_address(&email.from, e.to_string())
            })?;
        let to: Mailbox = email
            .to
            .parse()
            .map_err(|e: lettre::address::AddressError| {
                MailError::invalid_address(&email.to, e.to_string())
            })?;

        let content_type = match email.body {
            EmailBody::Html(_) => ContentType::TEXT_HTML,
            EmailBody::Text(_) => ContentType::TEXT_PLAIN,
        };

        Message::builder()
            .from(from)
            .to(to)
            .subject(email.subject.clone())
            .header(content_type)
            .body(email.body.content().to_string())
            .map_err(|e| MailError::Build(e.to_string()))
    }

    fn map_send_error(err: lettre::transport::smtp::Error) -> MailError {
        let code = err.status().map(|c| c.to_string());
        if code.as_deref() == Some(AUTH_FAILED_CODE) {
            MailError::AuthenticationFailed
        } else if err.is_permanent() || err.is_transient() {
            MailError::Rejected(err.to_string())
        } else {
            MailError::Connection(err.to_string())
        }
    }
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        let Some(transport) = &self.transport else {
            return Err(MailError::MissingCredentials(
                self.missing_credential.unwrap_or("SMTP_PASS"),
            ));
        };

        let message = Self::build_message(&email)?;
        let response = transport.send(message).await.map_err(Self::map_send_error)?;

        tracing::debug!(
            to = %email.to,
            code = %response.code(),
            "SMTP server accepted message"
        );
        Ok(())
    }
}

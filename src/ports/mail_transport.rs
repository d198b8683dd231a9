//! Mail Transport Port - Interface for the mail-delivery channel.
//!
//! The notification dispatcher hands fully rendered messages to this port;
//! the SMTP adapter (or a test double) decides how they travel.

use async_trait::async_trait;

/// Port for delivering a single email.
///
/// Implementations either accept the message or fail; they never retry.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError>;
}

/// A rendered email ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    /// Full `From` header value, e.g. `"The Smart Corner" <hello@example.com>`.
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: EmailBody,
}

/// Body format of an outgoing email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailBody {
    Html(String),
    Text(String),
}

impl EmailBody {
    /// Raw body content regardless of format.
    pub fn content(&self) -> &str {
        match self {
            EmailBody::Html(s) | EmailBody::Text(s) => s,
        }
    }

    pub fn is_html(&self) -> bool {
        matches!(self, EmailBody::Html(_))
    }
}

/// Mail delivery errors.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// SMTP credentials were not configured.
    #[error("mail credentials missing: {0}")]
    MissingCredentials(&'static str),

    /// A sender or recipient address could not be parsed.
    #[error("invalid address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    /// The message could not be assembled.
    #[error("failed to build message: {0}")]
    Build(String),

    /// Connection or TLS failure reaching the mail host.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The server refused our credentials.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// The server rejected the message.
    #[error("message rejected: {0}")]
    Rejected(String),
}

impl MailError {
    pub fn invalid_address(address: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAddress {
            address: address.into(),
            reason: reason.into(),
        }
    }
}

//! Mail Transport Adapters.
//!
//! - `SmtpMailTransport` - SMTP delivery over implicit TLS (lettre)
//! - `MockMailTransport` - Recording test double with failure injection

mod mock_transport;
mod smtp_transport;

pub use mock_transport::MockMailTransport;
pub use smtp_transport::{MailSettings, SmtpMailTransport};

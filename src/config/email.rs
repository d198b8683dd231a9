//! Email configuration (SMTP)

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Auth user required by the managed relay.
const MANAGED_AUTH_USER: &str = "resend";

/// Sender address accepted by the managed relay without domain verification.
const MANAGED_FROM_ADDRESS: &str = "onboarding@resend.dev";

/// Email configuration
///
/// Missing credentials are not a load-time error; every send fails instead,
/// which surfaces as a failed submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    /// SMTP host
    pub smtp_host: String,

    /// SMTP port (implicit TLS)
    pub smtp_port: u16,

    /// SMTP user, required unless the managed host is used
    pub smtp_user: Option<String>,

    /// SMTP password
    pub smtp_pass: Option<Secret<String>>,

    /// Recipient of operator notifications
    pub operator_email: String,

    /// Display name in the From header
    pub from_name: String,

    /// Per-send SMTP timeout in seconds
    pub timeout_secs: u64,
}

impl EmailConfig {
    /// True when the host is the managed relay, which fixes user and sender.
    pub fn is_managed_host(&self) -> bool {
        self.smtp_host.contains("resend")
    }

    /// User to authenticate as.
    pub fn auth_user(&self) -> Option<&str> {
        if self.is_managed_host() {
            Some(MANAGED_AUTH_USER)
        } else {
            self.smtp_user.as_deref().filter(|u| !u.trim().is_empty())
        }
    }

    /// Password to authenticate with.
    pub fn auth_password(&self) -> Option<&str> {
        self.smtp_pass
            .as_ref()
            .map(|p| p.expose_secret().as_str())
            .filter(|p| !p.is_empty())
    }

    /// Sender address, derived from the host like the auth user.
    pub fn from_address(&self) -> Option<&str> {
        if self.is_managed_host() {
            Some(MANAGED_FROM_ADDRESS)
        } else {
            self.auth_user()
        }
    }

    /// SMTP timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get formatted "From" header value
    pub fn from_header(&self) -> String {
        format!(
            "\"{}\" <{}>",
            self.from_name,
            self.from_address().unwrap_or_default()
        )
    }

    /// Validate email configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.smtp_host.trim().is_empty() {
            return Err(ValidationError::MissingSmtpHost);
        }
        if self.smtp_port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        if !crate::domain::briefing::is_valid_email(&self.operator_email) {
            return Err(ValidationError::InvalidOperatorEmail);
        }
        Ok(())
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: "smtp.resend.com".to_string(),
            smtp_port: 465,
            smtp_user: None,
            smtp_pass: None,
            operator_email: "arturonaranxo@gmail.com".to_string(),
            from_name: "The Smart Corner".to_string(),
            timeout_secs: 15,
        }
    }
}

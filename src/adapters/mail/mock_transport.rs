//! Mock mail transport for testing.
//!
//! Records every message handed to it and can be told to fail a given send.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::ports::{MailError, MailTransport, OutgoingEmail};

/// Recording mail transport.
#[derive(Debug, Clone, Default)]
pub struct MockMailTransport {
    sent: Arc<Mutex<Vec<OutgoingEmail>>>,
    attempts: Arc<Mutex<usize>>,
    /// 1-based attempt number that fails.
    fail_on: Option<usize>,
}

impl MockMailTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the `attempt`-th send (1-based) fail with a rejection.
    pub fn failing_on(mut self, attempt: usize) -> Self {
        self.fail_on = Some(attempt);
        self
    }

    /// Number of send attempts, failed ones included.
    pub fn call_count(&self) -> usize {
        *self.attempts.lock().unwrap()
    }

    /// Messages that were accepted.
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailTransport for MockMailTransport {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        let attempt = {
            let mut attempts = self.attempts.lock().unwrap();
            *attempts += 1;
            *attempts
        };

        if self.fail_on == Some(attempt) {
            return Err(MailError::Rejected(format!(
                "simulated failure on send {}",
                attempt
            )));
        }

        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}

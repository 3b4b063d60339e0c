use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

use super::{MailCredentials, MailError, Mailer, OutgoingEmail};

#[derive(Debug, Clone)]
enum Behavior {
    Succeed(String),
    Fail(String),
}

/// In-process transport that records every message handed to it.
#[derive(Debug, Clone)]
pub struct MemoryMailer {
    behavior: Behavior,
    sent: Arc<Mutex<Vec<OutgoingEmail>>>,
}

impl Default for MemoryMailer {
    fn default() -> Self {
        Self::succeeding("250 OK")
    }
}

impl MemoryMailer {
    pub fn succeeding(response: impl Into<String>) -> Self {
        Self {
            behavior: Behavior::Succeed(response.into()),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            behavior: Behavior::Fail(reason.into()),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Messages submitted so far, including ones that were made to fail.
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().clone()
    }

    pub fn send_count(&self) -> usize {
        self.sent.lock().len()
    }
}

#[async_trait]
impl Mailer for MemoryMailer {
    async fn send(
        &self,
        _credentials: &MailCredentials,
        email: &OutgoingEmail,
    ) -> Result<String, MailError> {
        self.sent.lock().push(email.clone());

        match &self.behavior {
            Behavior::Succeed(response) => Ok(response.clone()),
            Behavior::Fail(reason) => Err(MailError::Smtp(reason.clone())),
        }
    }
}

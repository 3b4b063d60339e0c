//! Mail transport seam.
//!
//! The relay service only knows the [`Mailer`] trait. [`SmtpMailer`] talks to
//! a real SMTP relay through lettre; [`MemoryMailer`] keeps messages in
//! process and is what the test suite drives.

mod memory;
mod smtp;

pub use memory::MemoryMailer;
pub use smtp::SmtpMailer;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    #[error("failed to build message: {0}")]
    Build(String),

    #[error("SMTP error: {0}")]
    Smtp(String),
}

/// A fully composed plain-text message, ready for a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Clone)]
pub struct MailCredentials {
    username: String,
    secret: String,
}

impl MailCredentials {
    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            secret: secret.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl std::fmt::Debug for MailCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailCredentials")
            .field("username", &self.username)
            .field("secret", &"[redacted]")
            .finish()
    }
}

#[async_trait]
pub trait Mailer: Send + Sync {
    /// Submits `email` and returns the provider's response text.
    async fn send(
        &self,
        credentials: &MailCredentials,
        email: &OutgoingEmail,
    ) -> Result<String, MailError>;
}

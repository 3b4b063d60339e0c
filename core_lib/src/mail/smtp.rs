use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::debug;

use super::{MailCredentials, MailError, Mailer, OutgoingEmail};
use crate::config::MailConfig;

/// SMTP relay over implicit TLS.
#[derive(Debug, Clone)]
pub struct SmtpMailer {
    host: String,
    port: u16,
}

impl SmtpMailer {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn from_config(config: &MailConfig) -> Self {
        Self::new(config.smtp_host.clone(), config.smtp_port)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

pub(crate) fn build_message(email: &OutgoingEmail) -> Result<Message, MailError> {
    let from: Mailbox = email
        .from
        .parse()
        .map_err(|e| MailError::InvalidAddress(format!("{}: {}", email.from, e)))?;
    let to: Mailbox = email
        .to
        .parse()
        .map_err(|e| MailError::InvalidAddress(format!("{}: {}", email.to, e)))?;

    Message::builder()
        .from(from)
        .to(to)
        .subject(email.subject.clone())
        .header(ContentType::TEXT_PLAIN)
        .body(email.body.clone())
        .map_err(|e| MailError::Build(e.to_string()))
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(
        &self,
        credentials: &MailCredentials,
        email: &OutgoingEmail,
    ) -> Result<String, MailError> {
        let message = build_message(email)?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.host)
            .map_err(|e| MailError::Smtp(e.to_string()))?
            .port(self.port)
            .credentials(Credentials::new(
                credentials.username().to_string(),
                credentials.secret().to_string(),
            ))
            .build();

        debug!("Submitting message to {}:{}", self.host, self.port);

        let response = transport
            .send(message)
            .await
            .map_err(|e| MailError::Smtp(e.to_string()))?;

        let lines: Vec<&str> = response.message().collect();
        Ok(format!("{} {}", response.code(), lines.join(" ")))
    }
}

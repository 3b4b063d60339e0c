//! Forwards validated contact submissions to the configured mail transport

use std::sync::Arc;
use tracing::{error, info, warn};

use crate::{
    config::MailConfig,
    error::{AppError, Result},
    mail::Mailer,
    models::{ContactSubmission, RelayOutcome},
};

#[derive(Clone)]
pub struct RelayService {
    config: Arc<MailConfig>,
    mailer: Arc<dyn Mailer>,
}

impl RelayService {
    pub fn new(config: MailConfig, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            config: Arc::new(config),
            mailer,
        }
    }

    /// Sends `submission` to the operator mailbox.
    ///
    /// Returns `AppError::Configuration` without touching the transport when
    /// credentials are absent. Transport failures are reported as
    /// `RelayOutcome::Failed`, not as an `Err`.
    pub async fn relay(&self, submission: ContactSubmission) -> Result<RelayOutcome> {
        let credentials = match self.config.credentials() {
            Some(credentials) => credentials,
            None => {
                warn!("Rejecting submission from {}: email credentials are not configured", submission.name);
                return Err(AppError::Configuration);
            }
        };

        let email = submission.compose(credentials.username(), &self.config.subject_prefix);

        info!(
            name = %submission.name,
            email = %submission.email,
            "Relaying contact submission"
        );

        // Detached so a client disconnect does not abort a send in flight.
        let mailer = Arc::clone(&self.mailer);
        let send = tokio::spawn(async move { mailer.send(&credentials, &email).await });

        let result = send
            .await
            .map_err(|e| AppError::Internal(format!("mail task aborted: {}", e)))?;

        match result {
            Ok(provider_response) => {
                info!(response = %provider_response, "Email sent successfully");
                Ok(RelayOutcome::Delivered { provider_response })
            }
            Err(err) => {
                error!("Failed to send email: {}", err);
                Ok(RelayOutcome::Failed {
                    reason: err.to_string(),
                })
            }
        }
    }
}

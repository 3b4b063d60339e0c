//! Contact form payload and the validated submission built from it

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppError;
use crate::mail::OutgoingEmail;

/// Raw `POST /send-email` body. Every field is optional at the
/// deserialization stage so that a missing field and an empty one are
/// reported the same way.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(required, length(min = 1, message = "name is required"))]
    pub name: Option<String>,

    #[validate(required, length(min = 1, message = "email is required"))]
    pub email: Option<String>,

    #[validate(required, length(min = 1, message = "message is required"))]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl TryFrom<ContactForm> for ContactSubmission {
    type Error = AppError;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        if let Err(errors) = form.validate() {
            tracing::debug!("Contact form rejected: {}", errors);
            return Err(AppError::Validation);
        }

        match (form.name, form.email, form.message) {
            (Some(name), Some(email), Some(message)) => Ok(Self {
                name,
                email,
                message,
                submitted_at: Utc::now(),
            }),
            _ => Err(AppError::Validation),
        }
    }
}

impl ContactSubmission {
    pub fn subject(&self, prefix: &str) -> String {
        format!("{} {}", prefix, self.name)
    }

    pub fn body(&self) -> String {
        format!(
            "You have received a new message from your website contact form.\n\
             \n\
             Name: {}\n\
             Email: {}\n\
             \n\
             Message:\n\
             {}\n\
             \n\
             Submitted at: {}\n",
            self.name,
            self.email,
            self.message,
            self.submitted_at.to_rfc3339(),
        )
    }

    /// Composes the notification sent to the operator. Sender and recipient
    /// are both `identity`; the submitter is never emailed.
    pub fn compose(&self, identity: &str, subject_prefix: &str) -> OutgoingEmail {
        OutgoingEmail {
            from: identity.to_string(),
            to: identity.to_string(),
            subject: self.subject(subject_prefix),
            body: self.body(),
        }
    }
}

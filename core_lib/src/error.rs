//! Application error types and handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::mail::MailError;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing required fields")]
    Validation,

    #[error("Invalid JSON body: {0}")]
    InvalidJson(String),

    #[error("Email service not configured")]
    Configuration,

    #[error("Failed to send email: {0}")]
    Transport(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation | AppError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Configuration
            | AppError::Transport(_)
            | AppError::Internal(_)
            | AppError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<MailError> for AppError {
    fn from(err: MailError) -> Self {
        AppError::Transport(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            AppError::Validation => json!({ "error": "Missing required fields" }),
            AppError::InvalidJson(reason) => json!({
                "error": "Invalid JSON body",
                "details": reason,
            }),
            AppError::Configuration => json!({ "error": "Email service not configured" }),
            AppError::Transport(reason) => json!({
                "error": "Failed to send email",
                "details": reason,
            }),
            AppError::NotFound(path) => json!({
                "error": "Not found",
                "details": path,
            }),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                json!({
                    "error": "Something went wrong",
                    "details": msg,
                })
            }
            AppError::Other(err) => {
                tracing::error!("Unexpected error: {:?}", err);
                json!({
                    "error": "Something went wrong",
                    "details": err.to_string(),
                })
            }
        };

        (status, Json(body)).into_response()
    }
}

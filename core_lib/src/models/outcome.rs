//! Response bodies

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::AppError;

/// What the transport reported for one relayed submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    Delivered { provider_response: String },
    Failed { reason: String },
}

impl RelayOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RelayOutcome::Delivered { .. })
    }

    pub fn provider_response(&self) -> Option<&str> {
        match self {
            RelayOutcome::Delivered { provider_response } => Some(provider_response),
            RelayOutcome::Failed { .. } => None,
        }
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            RelayOutcome::Delivered { .. } => None,
            RelayOutcome::Failed { reason } => Some(reason),
        }
    }
}

impl IntoResponse for RelayOutcome {
    fn into_response(self) -> Response {
        match self {
            RelayOutcome::Delivered { provider_response } => (
                StatusCode::OK,
                Json(json!({
                    "message": "Email sent successfully",
                    "response": provider_response,
                })),
            )
                .into_response(),
            RelayOutcome::Failed { reason } => AppError::Transport(reason).into_response(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

//! Liveness probe handlers

use axum::{response::IntoResponse, Json};
use tracing::info;

use crate::models::{MessageResponse, StatusResponse};

pub async fn handle_root() -> impl IntoResponse {
    info!("Root route accessed");
    Json(MessageResponse::new("Server is working!"))
}

pub async fn handle_health() -> impl IntoResponse {
    info!("Health check accessed");
    Json(StatusResponse::ok())
}

pub async fn handle_test() -> impl IntoResponse {
    info!("Test route accessed");
    Json(MessageResponse::new("Test successful"))
}

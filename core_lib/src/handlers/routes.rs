//! Route table

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use super::{contact::handle_send_email, health};
use crate::{error::AppError, AppState};

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::handle_root))
        .route("/health", get(health::handle_health))
        .route("/test", get(health::handle_test))
        .route("/send-email", post(handle_send_email))
        .fallback(handle_not_found)
}

async fn handle_not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

//! Contact form relay endpoint

use axum::{extract::State, response::IntoResponse};
use tracing::info;

use crate::{
    error::Result,
    extractors::ContactJson,
    models::{ContactForm, ContactSubmission},
    AppState,
};

pub async fn handle_send_email(
    State(state): State<AppState>,
    ContactJson(form): ContactJson<ContactForm>,
) -> Result<impl IntoResponse> {
    info!("POST /send-email - contact form received");

    let submission = ContactSubmission::try_from(form)?;
    let outcome = state.relay_service.relay(submission).await?;

    Ok(outcome)
}

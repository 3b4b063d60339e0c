//! Core library for the contact relay service: configuration, the mail
//! transport seam, the relay service and the HTTP surface around it.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod mail;
pub mod middleware;
pub mod models;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use handlers::routes::create_routes;
pub use mail::{MailCredentials, MailError, Mailer, MemoryMailer, OutgoingEmail, SmtpMailer};
pub use middleware::cors::cors_layer_from_config;
pub use models::{ContactForm, ContactSubmission, RelayOutcome};
pub use services::RelayService;

use axum::Router;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub version: String,
    pub relay_service: RelayService,
}

impl AppState {
    pub fn new(config: &AppConfig, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            app_name: "Contact Relay".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            relay_service: RelayService::new(config.mail.clone(), mailer),
        }
    }

    /// State backed by the real SMTP transport described in `config`.
    pub fn with_smtp(config: &AppConfig) -> Self {
        Self::new(config, Arc::new(SmtpMailer::from_config(&config.mail)))
    }
}

pub fn create_app(state: AppState) -> Router {
    create_app_with_config(state, &AppConfig::default())
}

pub fn create_app_with_config(state: AppState, config: &AppConfig) -> Router {
    create_routes()
        .layer(middleware::panic::catch_panic_layer())
        .layer(middleware::cors::cors_layer_from_config(&config.cors))
        .layer(middleware::logging::logging_layer())
        .layer(middleware::logging::propagate_request_id_layer())
        .layer(middleware::logging::set_request_id_layer())
        .with_state(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> anyhow::Result<()> {
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}

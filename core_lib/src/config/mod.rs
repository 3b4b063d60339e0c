//! Process-wide configuration, loaded once at startup

pub mod settings;

pub use settings::{AppConfig, CorsConfig, MailConfig, ServerConfig};

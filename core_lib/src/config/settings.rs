use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::mail::MailCredentials;

pub const WILDCARD: &str = "*";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub mail: MailConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct MailConfig {
    pub sender: Option<String>,
    pub secret: Option<String>,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub subject_prefix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub allow_credentials: bool,
    pub max_age_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 10000,
        }
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            sender: None,
            secret: None,
            smtp_host: "smtp.gmail.com".to_string(),
            smtp_port: 465,
            subject_prefix: "New contact form submission from".to_string(),
        }
    }
}

impl std::fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailConfig")
            .field("sender", &self.sender)
            .field("secret", &self.secret.as_ref().map(|_| "[redacted]"))
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("subject_prefix", &self.subject_prefix)
            .finish()
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:5173".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
            allowed_methods: vec![
                "GET".to_string(),
                "POST".to_string(),
                "OPTIONS".to_string(),
            ],
            allowed_headers: vec![
                "content-type".to_string(),
                "accept".to_string(),
                "authorization".to_string(),
            ],
            allow_credentials: true,
            max_age_seconds: 3600,
        }
    }
}

impl MailConfig {
    /// Both the sender identity and the secret, or `None` if either is
    /// missing or blank.
    pub fn credentials(&self) -> Option<MailCredentials> {
        let sender = self.sender.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let secret = self.secret.as_deref().filter(|s| !s.is_empty())?;
        Some(MailCredentials::new(sender, secret))
    }

    pub fn is_configured(&self) -> bool {
        self.credentials().is_some()
    }
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        contains_wildcard(&self.allowed_origins)
    }

    pub fn allows_any_method(&self) -> bool {
        contains_wildcard(&self.allowed_methods)
    }

    pub fn allows_any_header(&self) -> bool {
        contains_wildcard(&self.allowed_headers)
    }

    /// Whether any list uses `*`, which browsers never honor alongside
    /// credentials.
    pub fn has_wildcard(&self) -> bool {
        self.allows_any_origin() || self.allows_any_method() || self.allows_any_header()
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Loads configuration with an explicit environment. `None` reads the
    /// process environment.
    pub fn load_from(env: Option<HashMap<String, String>>) -> Result<Self, ConfigError> {
        let lookup = |key: &str| match &env {
            Some(vars) => vars.get(key).cloned(),
            None => std::env::var(key).ok(),
        };

        let mut builder = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?);

        if std::path::Path::new("config.toml").exists() {
            builder = builder.add_source(File::with_name("config"));
        }

        builder = builder.add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("cors.allowed_origins")
                .with_list_parse_key("cors.allowed_methods")
                .with_list_parse_key("cors.allowed_headers")
                .try_parsing(true)
                .source(env.clone()),
        );

        let origins = lookup("ALLOWED_ORIGINS").map(|raw| split_list(&raw));

        builder = builder
            .set_override_option("server.port", lookup("PORT"))?
            .set_override_option("mail.sender", lookup("EMAIL_USER"))?
            .set_override_option("mail.secret", lookup("EMAIL_PASS"))?
            .set_override_option("cors.allowed_origins", origins)?;

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        app_config.validate()?;

        if !app_config.mail.is_configured() {
            tracing::warn!("EMAIL_USER/EMAIL_PASS not set - /send-email will answer 500 until configured");
        }

        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("Server port cannot be 0".to_string()));
        }

        if self.server.host.trim().is_empty() {
            return Err(ConfigError::Message("Server host cannot be empty".to_string()));
        }

        if self.mail.smtp_host.trim().is_empty() {
            return Err(ConfigError::Message("SMTP host cannot be empty".to_string()));
        }

        if self.cors.allowed_origins.is_empty() {
            return Err(ConfigError::Message(
                "At least one allowed CORS origin is required".to_string(),
            ));
        }

        if self.cors.allow_credentials {
            let wildcards = [
                ("origin", self.cors.allows_any_origin()),
                ("method", self.cors.allows_any_method()),
                ("header", self.cors.allows_any_header()),
            ];
            if let Some((kind, _)) = wildcards.iter().find(|(_, any)| *any) {
                return Err(ConfigError::Message(format!(
                    "Wildcard CORS {} cannot be combined with allow_credentials",
                    kind
                )));
            }
        }

        for method in &self.cors.allowed_methods {
            if http::Method::from_bytes(method.trim().as_bytes()).is_err() {
                return Err(ConfigError::Message(format!("Invalid CORS method: {}", method)));
            }
        }

        for header in &self.cors.allowed_headers {
            if http::HeaderName::from_bytes(header.trim().as_bytes()).is_err() {
                return Err(ConfigError::Message(format!("Invalid CORS header: {}", header)));
            }
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn contains_wildcard(values: &[String]) -> bool {
    values.iter().any(|v| v.trim() == WILDCARD)
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

//! CORS (Cross-Origin Resource Sharing) middleware configuration

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer as TowerCorsLayer};

use crate::config::CorsConfig;

pub fn cors_layer_from_config(config: &CorsConfig) -> TowerCorsLayer {
    let methods = if config.allows_any_method() {
        AllowMethods::any()
    } else {
        let methods: Vec<Method> = config
            .allowed_methods
            .iter()
            .filter_map(|m| Method::from_bytes(m.trim().as_bytes()).ok())
            .collect();
        AllowMethods::list(methods)
    };

    let headers = if config.allows_any_header() {
        AllowHeaders::any()
    } else {
        let headers: Vec<HeaderName> = config
            .allowed_headers
            .iter()
            .filter_map(|h| HeaderName::from_bytes(h.trim().as_bytes()).ok())
            .collect();
        AllowHeaders::list(headers)
    };

    let origins = if config.allows_any_origin() {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.trim().parse().ok())
            .collect();
        AllowOrigin::list(origins)
    };

    // `*` in any list cannot be combined with credentials.
    let credentials = config.allow_credentials && !config.has_wildcard();
    if config.allow_credentials && !credentials {
        tracing::warn!("Wildcard CORS entry configured; disabling credentials");
    }

    TowerCorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(headers)
        .allow_credentials(credentials)
        .max_age(std::time::Duration::from_secs(config.max_age_seconds))
}

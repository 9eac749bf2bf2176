use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, Any, CorsLayer};
use tracing::warn;

use crate::config::CorsConfig;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CorsError {
    #[error(
        "CORS misconfiguration: allowed_origins=['*'] cannot be combined with \
         allow_credentials=true; list explicit origins instead"
    )]
    WildcardWithCredentials,
}

/// Build a CORS layer from config.
///
/// With credentials enabled, a `*` method or header list mirrors the
/// request instead of answering with a literal wildcard.
///
/// # Errors
/// `WildcardWithCredentials` when `allowed_origins` contains `*` while
/// `allow_credentials` is `true`.
pub fn build_cors_layer(cfg: &CorsConfig) -> Result<CorsLayer, CorsError> {
    let has_wildcard_origin = cfg.allowed_origins.iter().any(|o| o == "*");

    if has_wildcard_origin && cfg.allow_credentials {
        return Err(CorsError::WildcardWithCredentials);
    }

    if has_wildcard_origin {
        warn!(
            "CORS is configured with allowed_origins=['*']. \
             Any website can make cross-origin requests to the API."
        );
    }

    let mut layer = CorsLayer::new();

    if has_wildcard_origin {
        layer = layer.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cfg
            .allowed_origins
            .iter()
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();
        if !origins.is_empty() {
            layer = layer.allow_origin(origins);
        }
    }

    if cfg.allowed_methods.iter().any(|m| m == "*") {
        layer = layer.allow_methods(if cfg.allow_credentials {
            AllowMethods::mirror_request()
        } else {
            AllowMethods::any()
        });
    } else {
        let methods: Vec<Method> = cfg
            .allowed_methods
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        if !methods.is_empty() {
            layer = layer.allow_methods(methods);
        }
    }

    if cfg.allowed_headers.iter().any(|h| h == "*") {
        layer = layer.allow_headers(if cfg.allow_credentials {
            AllowHeaders::mirror_request()
        } else {
            AllowHeaders::any()
        });
    } else {
        let headers: Vec<HeaderName> = cfg
            .allowed_headers
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        if !headers.is_empty() {
            layer = layer.allow_headers(headers);
        }
    }

    if cfg.allow_credentials {
        layer = layer.allow_credentials(true);
    }

    if cfg.max_age_seconds > 0 {
        layer = layer.max_age(Duration::from_secs(cfg.max_age_seconds));
    }

    Ok(layer)
}

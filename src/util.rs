use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::AppConfig;

/// Initialize dotenv and structured tracing based on RUST_LOG.
///
/// The `.env` file is loaded before the subscriber is installed so that a
/// RUST_LOG value provided there takes effect.
pub fn init_tracing() {
    let env_source = match dotenvy::dotenv() {
        Ok(path) => path.display().to_string(),
        Err(_) => "none".to_string(),
    };

    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=info".into());
    let subscriber = fmt().with_env_filter(EnvFilter::new(filter)).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    tracing::info!("Environment loaded from: {}", env_source);
}

/// Shared application state used by the HTTP server and handlers.
///
/// Both fields are immutable for the process lifetime; each request is fully
/// independent and no further coordination is needed.
#[derive(Debug, Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            http: build_http_client_from_env(),
            config,
        }
    }
}

/// Build the shared HTTP client, honoring an optional overall timeout.
///
/// Environment:
/// - SOUSCHEF_HTTP_TIMEOUT_SECONDS -> overall request timeout (u64)
///
/// The image call applies its own bounded wait on top of this; the completion
/// call is only limited by this client-level timeout when one is configured.
pub fn build_http_client_from_env() -> reqwest::Client {
    let mut builder = reqwest::Client::builder();

    if let Ok(secs) = std::env::var("SOUSCHEF_HTTP_TIMEOUT_SECONDS") {
        if let Ok(n) = secs.trim().parse::<u64>() {
            builder = builder.timeout(std::time::Duration::from_secs(n));
        }
    }

    // User-Agent for observability
    builder = builder.user_agent(format!("souschef/{}", env!("CARGO_PKG_VERSION")));

    builder.build().unwrap_or_else(|_| reqwest::Client::new())
}

/// Build a CORS layer from environment variables.
///
/// Environment:
/// - CORS_ALLOWED_ORIGINS: "*" or comma-separated origins
///
/// The default is permissive: cross-origin requests are allowed from any
/// origin on all routes.
pub fn cors_layer_from_env() -> tower_http::cors::CorsLayer {
    let mut layer = tower_http::cors::CorsLayer::new()
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any);

    match std::env::var("CORS_ALLOWED_ORIGINS") {
        Ok(origins) if origins.trim() != "*" => {
            let vals: Vec<http::HeaderValue> = origins
                .split(',')
                .filter_map(|part| http::HeaderValue::from_str(part.trim()).ok())
                .collect();
            if vals.is_empty() {
                layer = layer.allow_origin(tower_http::cors::Any);
            } else {
                layer = layer.allow_origin(tower_http::cors::AllowOrigin::list(vals));
            }
        }
        _ => {
            layer = layer.allow_origin(tower_http::cors::Any);
        }
    }

    layer
}

/// Serialize a JSON value with 4-space indentation.
///
/// With serde_json's `preserve_order` feature enabled, object keys come back
/// out in the order they were decoded, so a decode/re-encode round trip keeps
/// the upstream field order at every nesting level.
pub fn to_pretty_json(value: &serde_json::Value) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    // serde_json output is always valid UTF-8
    Ok(String::from_utf8(buf).unwrap_or_default())
}

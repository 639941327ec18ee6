//! Docket Server
//!
//! HTTP boundary for document task extraction: loads the linguistic analyzer
//! once at startup, then serves `/extract-tasks` and `/health`.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod handlers;

use axum::http::HeaderValue;
use config::ServerConfig;
use docket_extractor::{ExtractorError, Linguistics, TaskExtractor};
use docket_nlp::NlpConfig;
use handlers::{create_router, AppState};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Extractor could not be built
    #[error("Extractor error: {0}")]
    Extractor(#[from] ExtractorError),

    /// A configured CORS origin is not a valid header value
    #[error("Invalid CORS origin: {0}")]
    Cors(String),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins over `default_level`. Calling this twice is harmless.
pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Load the linguistic capability
///
/// Failures are logged and leave the service degraded.
pub fn load_linguistics(config: &NlpConfig) -> Linguistics {
    match docket_nlp::load_analyzer(config) {
        Ok(Some(analyzer)) => {
            let linguistics = Linguistics::Present(analyzer);
            info!("Linguistic analyzer '{}' loaded", linguistics.name());
            linguistics
        }
        Ok(None) => {
            warn!("Linguistic analyzer disabled, running in degraded mode");
            Linguistics::Absent
        }
        Err(e) => {
            warn!("Failed to load linguistic analyzer, running in degraded mode: {}", e);
            Linguistics::Absent
        }
    }
}

/// Build the CORS layer
///
/// No origins means any origin is allowed.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer, ServerError> {
    if origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }

    let values = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ServerError::Cors(origin.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(values))
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any))
}

/// Build the application around an already-loaded capability
pub fn build_app(
    config: &ServerConfig,
    linguistics: Linguistics,
) -> Result<axum::Router, ServerError> {
    let extractor = TaskExtractor::new(linguistics, config.extractor.clone())?;
    let state = AppState::new(extractor, config.request_timeout());
    Ok(create_router(state).layer(cors_layer(&config.cors_allowed_origins)?))
}

/// Start the HTTP server
///
/// Initializes tracing, loads the analyzer, and serves until shutdown.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    init_tracing(&config.log_level);
    config.validate()?;

    info!("Starting Docket server");
    info!("Bind address: {}", config.bind_addr());
    info!("Request timeout: {} seconds", config.request_timeout_secs);
    info!(
        "Max text length: {} chars, duplicate threshold: {}",
        config.extractor.max_text_length, config.extractor.duplicate_threshold
    );

    let linguistics = load_linguistics(&config.nlp);
    let app = build_app(&config, linguistics)?;

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_load_linguistics() {
        assert!(load_linguistics(&NlpConfig::default()).is_available());

        let disabled = NlpConfig {
            enabled: false,
            ..Default::default()
        };
        assert!(!load_linguistics(&disabled).is_available());
    }

    #[test]
    fn test_load_failure_degrades() {
        let broken = NlpConfig {
            enabled: true,
            lexicon_path: Some(PathBuf::from("/nonexistent/verbs.txt")),
        };
        assert!(!load_linguistics(&broken).is_available());
    }

    #[test]
    fn test_cors_layer() {
        assert!(cors_layer(&[]).is_ok());
        assert!(cors_layer(&["http://localhost:3000".to_string()]).is_ok());
        assert!(matches!(
            cors_layer(&["bad\norigin".to_string()]),
            Err(ServerError::Cors(_))
        ));
    }

    #[test]
    fn test_build_app_rejects_invalid_extractor_config() {
        let mut config = ServerConfig::default();
        config.extractor.duplicate_threshold = 2.0;
        assert!(matches!(
            build_app(&config, Linguistics::Absent),
            Err(ServerError::Extractor(_))
        ));
    }
}

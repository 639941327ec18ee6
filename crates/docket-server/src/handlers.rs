//! HTTP request handlers for the extraction service.
//!
//! Implements the task extraction and health check endpoints using axum.

use crate::dto::ExtractTasksResponse;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use docket_extractor::{ExtractorError, TaskExtractor};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, info, info_span, warn, Instrument, Span};
use uuid::Uuid;

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "ML Document Task Extraction";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Extractor shared by all requests
    pub extractor: Arc<TaskExtractor>,
    /// Upper bound for one extraction
    pub request_timeout: Duration,
}

impl AppState {
    /// Create state around an extractor
    pub fn new(extractor: TaskExtractor, request_timeout: Duration) -> Self {
        AppState {
            extractor: Arc::new(extractor),
            request_timeout,
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Always "healthy" while the process serves requests
    pub status: String,
    /// Whether a linguistic analyzer is loaded
    pub spacy_loaded: bool,
    /// Service name
    pub service: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Malformed request body
    BadRequest(String),
    /// Text exceeds the configured maximum
    PayloadTooLarge(String),
    /// Timeout or pipeline failure
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg),
            AppError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<ExtractorError> for AppError {
    fn from(err: ExtractorError) -> Self {
        match err {
            ExtractorError::TextTooLong(..) => AppError::PayloadTooLarge(err.to_string()),
            ExtractorError::DeadlineExceeded => {
                AppError::InternalError("Extraction timed out".to_string())
            }
            ExtractorError::Config(_) => AppError::InternalError(err.to_string()),
        }
    }
}

/// Pull the text out of a request body
///
/// `Ok(None)` means there is nothing to extract (null text).
fn parse_text(body: &[u8]) -> Result<Option<String>, AppError> {
    let missing = || AppError::BadRequest("Missing 'text' field".to_string());

    let value: Value = serde_json::from_slice(body).map_err(|_| missing())?;
    match value.as_object().and_then(|object| object.get("text")) {
        None => Err(missing()),
        Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(_) => Err(AppError::BadRequest("'text' must be a string".to_string())),
    }
}

/// Health check endpoint
///
/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        spacy_loaded: state.extractor.linguistics().is_available(),
        service: SERVICE_NAME.to_string(),
    })
}

/// Task extraction endpoint
///
/// POST /extract-tasks
async fn extract_tasks(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ExtractTasksResponse>, AppError> {
    let span = info_span!("extract_tasks", request_id = %Uuid::now_v7());
    run_extraction(state, body).instrument(span).await
}

async fn run_extraction(
    state: AppState,
    body: Bytes,
) -> Result<Json<ExtractTasksResponse>, AppError> {
    let text = match parse_text(&body) {
        Ok(Some(text)) if !text.trim().is_empty() => text,
        Ok(_) => return Ok(Json(ExtractTasksResponse::empty())),
        Err(e) => {
            warn!("Rejected request: {:?}", e);
            return Err(e);
        }
    };

    let extractor = Arc::clone(&state.extractor);
    let deadline = Instant::now() + state.request_timeout;
    let span = Span::current();
    let task = tokio::task::spawn_blocking(move || {
        span.in_scope(|| extractor.extract_before(&text, deadline))
    });

    let outcome = match tokio::time::timeout(state.request_timeout, task).await {
        Ok(Ok(result)) => result?,
        Ok(Err(join_error)) => {
            error!("Extraction task failed: {}", join_error);
            return Err(AppError::InternalError("Extraction failed".to_string()));
        }
        Err(_) => {
            error!(
                "Extraction timed out after {}s",
                state.request_timeout.as_secs_f64()
            );
            return Err(AppError::InternalError("Extraction timed out".to_string()));
        }
    };

    let metadata = &outcome.metadata;
    info!(
        mode = %metadata.mode,
        raw_candidates = metadata.raw_candidates,
        duplicates_removed = metadata.duplicates_removed,
        processing_time_ms = metadata.processing_time_ms,
        "Extracted {} tasks",
        outcome.len()
    );

    Ok(Json(ExtractTasksResponse::from_suggestions(&outcome.suggestions)))
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/health", get(health_check))
        .route("/extract-tasks", post(extract_tasks))
        .with_state(state)
}

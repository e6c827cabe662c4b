//! REST API endpoints.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use prometheus::{Encoder, TextEncoder};

use super::api::{round_ms, EmbedRequest, EmbedResponse, HealthResponse, RootResponse};
use super::metrics::{track_requests, EMBEDDING_LATENCY};
use crate::embeddings::Embedder;
use crate::error::{ApiError, EmbeddingError, Error};

/// Shared handler state.
///
/// Holds the one model instance every request is served from.
#[derive(Clone)]
pub struct AppState {
    pub embedder: Arc<dyn Embedder>,
}

impl AppState {
    /// Wrap an embedder for sharing across handlers.
    pub fn new(embedder: impl Embedder + 'static) -> Self {
        Self {
            embedder: Arc::new(embedder),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("model", &self.embedder.model_name())
            .field("dims", &self.embedder.dimensions())
            .finish()
    }
}

/// Create REST API router.
pub fn create_rest_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/embed", post(embed))
        .route("/metrics", get(metrics))
        .route_layer(middleware::from_fn(track_requests))
        .with_state(state)
}

/// Service info endpoint.
async fn root() -> Json<RootResponse> {
    Json(RootResponse::default())
}

/// Health check endpoint.
///
/// Reports the configured model without probing it.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    tracing::debug!(model = state.embedder.model_name(), "Health check");

    Json(HealthResponse {
        status: "healthy".to_string(),
        model: state.embedder.model_name().to_string(),
    })
}

/// Embedding endpoint.
async fn embed(
    State(state): State<AppState>,
    payload: Result<Json<EmbedRequest>, JsonRejection>,
) -> Result<Json<EmbedResponse>, ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    let embedder = Arc::clone(&state.embedder);
    let expected_dims = embedder.dimensions();

    // Inference is CPU-bound; keep it off the async workers.
    let (result, elapsed) = tokio::task::spawn_blocking(move || {
        let start = Instant::now();
        let result = embedder.embed(&request.text);
        (result, start.elapsed())
    })
    .await
    .map_err(|e| Error::internal(format!("embedding task failed: {e}")))?;

    let embedding = result?;
    if embedding.len() != expected_dims {
        return Err(Error::from(EmbeddingError::Dimension {
            expected: expected_dims,
            actual: embedding.len(),
        })
        .into());
    }

    EMBEDDING_LATENCY.observe(elapsed.as_secs_f64());
    let elapsed_ms = round_ms(elapsed.as_secs_f64() * 1000.0);

    tracing::debug!(dims = embedding.len(), elapsed_ms, "Embedding generated");

    Ok(Json(EmbedResponse {
        dims: embedding.len(),
        embedding,
        elapsed_ms,
    }))
}

/// Prometheus metrics endpoint.
async fn metrics() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    match encoder.encode(&metric_families, &mut buffer) {
        Ok(()) => {
            tracing::trace!("Metrics encoded successfully");
            (
                StatusCode::OK,
                [(
                    axum::http::header::CONTENT_TYPE,
                    "text/plain; charset=utf-8",
                )],
                buffer,
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to encode metrics");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(
                    axum::http::header::CONTENT_TYPE,
                    "text/plain; charset=utf-8",
                )],
                b"Failed to encode metrics".to_vec(),
            )
        }
    }
}

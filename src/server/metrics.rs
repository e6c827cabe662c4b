//! Prometheus metrics definitions.

use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;
use once_cell::sync::Lazy;
use prometheus::{
    register_histogram, register_histogram_vec, register_int_counter_vec, register_int_gauge,
    Histogram, HistogramVec, IntCounterVec, IntGauge,
};

/// Request latency histogram.
pub static REQUEST_LATENCY: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "embedding_service_request_duration_seconds",
        "Request latency in seconds",
        &["endpoint", "method"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]
    )
    .unwrap()
});

/// Request counter.
pub static REQUEST_COUNT: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "embedding_service_requests_total",
        "Total number of requests",
        &["endpoint", "method", "status"]
    )
    .unwrap()
});

/// Time spent inside the model per embedding.
pub static EMBEDDING_LATENCY: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "embedding_service_inference_duration_seconds",
        "Model inference time per embedding in seconds",
        vec![0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5]
    )
    .unwrap()
});

/// Dimensionality of the loaded model.
pub static EMBEDDING_DIMS: Lazy<IntGauge> = Lazy::new(|| {
    register_int_gauge!(
        "embedding_service_model_dimensions",
        "Output dimensionality of the loaded model"
    )
    .unwrap()
});

/// Initialize all metrics (call once at startup).
pub fn init_metrics() {
    let _ = &*REQUEST_LATENCY;
    let _ = &*REQUEST_COUNT;
    let _ = &*EMBEDDING_LATENCY;
    let _ = &*EMBEDDING_DIMS;

    tracing::debug!("Prometheus metrics initialized");
}

/// Middleware recording request count and latency per route.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| "unmatched".to_string(), |p| p.as_str().to_string());
    let method = request.method().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    REQUEST_LATENCY
        .with_label_values(&[endpoint.as_str(), method.as_str()])
        .observe(start.elapsed().as_secs_f64());
    REQUEST_COUNT
        .with_label_values(&[endpoint.as_str(), method.as_str(), response.status().as_str()])
        .inc();

    response
}

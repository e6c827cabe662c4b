//! REST API server.
//!
//! This module provides:
//! - The `/`, `/health` and `/embed` endpoints using axum
//! - Prometheus metrics at `/metrics`
//! - Tracing setup and request spans

mod api;
mod app;
mod metrics;
mod observability;
mod rest;

pub use api::{round_ms, EmbedRequest, EmbedResponse, HealthResponse, RootResponse, SERVICE_NAME};
pub use app::{App, ServerConfig};
pub use metrics::init_metrics;
pub use observability::init_tracing;
pub use rest::{create_rest_router, AppState};

//! Prometheus exposition endpoint

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Routes serving `GET /metrics`, independent of the application state.
pub fn router(handle: Option<PrometheusHandle>) -> Router {
    Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(Arc::new(handle))
}

/// Render the recorder, or 404 when metrics are disabled.
async fn metrics_handler(State(handle): State<Arc<Option<PrometheusHandle>>>) -> impl IntoResponse {
    match handle.as_ref() {
        Some(h) => (StatusCode::OK, h.render()),
        None => (StatusCode::NOT_FOUND, "Metrics not enabled".to_string()),
    }
}

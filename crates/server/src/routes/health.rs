use axum::{http::StatusCode, Json};

use common::types::Health;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Prometheus text exposition of the default registry.
pub async fn metrics() -> (StatusCode, String) {
    common::metrics::encode_metrics()
}

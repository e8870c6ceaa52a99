use crate::models::HealthResponse;
use crate::routes;
use axum::{Json, http::StatusCode};

/// GET /health handler - Health check endpoint
///
/// The service holds no connections or state to probe, so a reachable
/// process is a healthy one.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler() -> (StatusCode, Json<HealthResponse>) {
    tracing::debug!("Health check passed");
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
        }),
    )
}

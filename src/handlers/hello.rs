use crate::models::HelloResponse;
use crate::routes;
use axum::{Json, http::StatusCode};

/// GET /api/hello handler - Fixed JSON greeting for the frontend
#[utoipa::path(
    get,
    path = routes::API_HELLO,
    responses(
        (status = 200, description = "Greeting message", body = HelloResponse)
    ),
    tag = "hello"
)]
pub async fn hello_handler() -> (StatusCode, Json<HelloResponse>) {
    tracing::debug!("Serving hello message");
    (
        StatusCode::OK,
        Json(HelloResponse {
            message: "Hello from backend!".to_string(),
        }),
    )
}

pub mod api_doc;
pub mod config;
pub mod cors;
pub mod handlers;
pub mod models;
pub mod routes;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;

/// Build the application router.
///
/// Kept separate from the binary entry point so tests can drive the full
/// application in-process without binding a socket.
pub fn app() -> Router {
    Router::new()
        .route(routes::ROOT, get(handlers::root_handler))
        .route(routes::API_HELLO, get(handlers::hello_handler))
        .route(routes::HEALTH, get(handlers::health_handler))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors::cors_layer())
        .layer(TraceLayer::new_for_http())
}

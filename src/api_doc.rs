use utoipa::OpenApi;

use crate::handlers;
use crate::models::{HealthResponse, HelloResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "hello-backend API",
        version = "1.0.0",
        description = "A small demo backend serving fixed responses to a frontend"
    ),
    paths(
        handlers::root::root_handler,
        handlers::hello::hello_handler,
        handlers::health::health_handler
    ),
    components(
        schemas(
            HelloResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "hello", description = "Demo greeting operations"),
        (name = "health", description = "Health check operations")
    )
)]
pub struct ApiDoc;

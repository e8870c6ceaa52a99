use crate::routes;

/// Fixed greeting returned at the root path
pub const GREETING: &str = "Backend server is running";

/// GET / handler - Root greeting
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Greeting text", body = String, content_type = "text/plain")
    ),
    tag = "hello"
)]
pub async fn root_handler() -> &'static str {
    tracing::debug!("Serving root greeting");
    GREETING
}

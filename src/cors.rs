use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

/// Frontend origins allowed to call the API cross-origin.
///
/// The first is the frontend dev server, the second its production preview.
pub const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:4173"];

/// Build the CORS layer applied to the whole router.
///
/// Permissive for the two fixed frontend origins: any method, any request
/// header, no credentials.
pub fn cors_layer() -> CorsLayer {
    let origins = ALLOWED_ORIGINS.map(HeaderValue::from_static);

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

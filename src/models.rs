use serde::{Deserialize, Serialize};

/// Response type for the hello endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HelloResponse {
    pub message: String,
}

/// Response type for the health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

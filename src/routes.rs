// Route path constants - single source of truth for all API paths

pub const ROOT: &str = "/";
pub const API_HELLO: &str = "/api/hello";
pub const HEALTH: &str = "/health";

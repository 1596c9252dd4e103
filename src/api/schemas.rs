// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Error body returned by every failing endpoint
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    #[schema(example = "VALIDATION_ERROR")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Invalid email format")]
    pub message: String,
}

/// Body of endpoints that only report an outcome
#[derive(Serialize, ToSchema)]
pub struct MessageBody {
    #[schema(example = "User followed")]
    pub message: String,
}

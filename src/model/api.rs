use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub detail: String,
}

/// The response for operations that have no resource to return
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageDto {
    /// Human readable outcome of the operation
    pub message: String,
}

/// Service health report
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthDto {
    pub status: String,
}

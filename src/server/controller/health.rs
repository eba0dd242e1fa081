//! Health check endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::{ErrorDto, HealthDto},
    server::model::app::AppState,
};

/// OpenAPI tag for the health endpoint
pub static HEALTH_TAG: &str = "health";

/// Report whether the service can reach its database
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service and database are reachable", body = HealthDto),
        (status = 503, description = "Database is unreachable", body = ErrorDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.db.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthDto {
                status: "ok".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!("Health check failed to reach database: {}", e);

            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorDto {
                    detail: "Database unavailable".to_string(),
                }),
            )
                .into_response()
        }
    }
}

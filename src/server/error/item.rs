//! Errors for item lookups.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors specific to item operations.
#[derive(Error, Debug)]
pub enum ItemError {
    /// No row in the `Items` table has the requested ID.
    #[error("Item ID {0} not found")]
    NotFound(i32),
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => {
                tracing::debug!("{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        detail: "Item not found".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

//! HTTP controller endpoints for the MRV Evo web API.
//!
//! Axum handlers that extract request data, call into the service layer and return HTTP
//! responses. Each handler is annotated with utoipa for the OpenAPI document.

pub mod health;
pub mod item;

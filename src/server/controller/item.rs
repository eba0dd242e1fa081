//! Item CRUD endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        item::{ItemDto, ItemPayload},
    },
    server::{error::Error, model::app::AppState, service::item::ItemService},
};

/// OpenAPI tag for the item endpoints
pub static ITEM_TAG: &str = "items";

/// Create a new item
#[utoipa::path(
    post,
    path = "/items/",
    tag = ITEM_TAG,
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Item created", body = ItemDto),
        (status = 422, description = "Request body is missing a field or has a wrong type"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<ItemPayload>,
) -> Result<impl IntoResponse, Error> {
    let item_service = ItemService::new(&state.db);

    let item = item_service.create_item(payload).await?;

    Ok((StatusCode::OK, Json(item)))
}

/// List all items
#[utoipa::path(
    get,
    path = "/items/",
    tag = ITEM_TAG,
    responses(
        (status = 200, description = "All items ordered by ID", body = Vec<ItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_items(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let item_service = ItemService::new(&state.db);

    let items = item_service.get_items().await?;

    Ok((StatusCode::OK, Json(items)))
}

/// Get a single item
#[utoipa::path(
    get,
    path = "/items/{item_id}",
    tag = ITEM_TAG,
    params(("item_id" = i32, Path, description = "ID of the item")),
    responses(
        (status = 200, description = "Item found", body = ItemDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(item_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let item_service = ItemService::new(&state.db);

    let item = item_service.get_item(item_id).await?;

    Ok((StatusCode::OK, Json(item)))
}

/// Replace the name, description and category of an item
#[utoipa::path(
    put,
    path = "/items/{item_id}",
    tag = ITEM_TAG,
    params(("item_id" = i32, Path, description = "ID of the item")),
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Item updated", body = ItemDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 422, description = "Request body is missing a field or has a wrong type"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(item_id): Path<i32>,
    Json(payload): Json<ItemPayload>,
) -> Result<impl IntoResponse, Error> {
    let item_service = ItemService::new(&state.db);

    let item = item_service.update_item(item_id, payload).await?;

    Ok((StatusCode::OK, Json(item)))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/items/{item_id}",
    tag = ITEM_TAG,
    params(("item_id" = i32, Path, description = "ID of the item")),
    responses(
        (status = 200, description = "Item deleted", body = MessageDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(item_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let item_service = ItemService::new(&state.db);

    item_service.delete_item(item_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Item deleted".to_string(),
        }),
    ))
}

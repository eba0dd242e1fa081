//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications. The OpenAPI
//! document is served at `/openapi.json` with Swagger UI at `/docs`.

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /items/` - Create an item
/// - `GET /items/` - List all items
/// - `GET /items/{item_id}` - Get an item
/// - `PUT /items/{item_id}` - Replace an item's fields
/// - `DELETE /items/{item_id}` - Delete an item
/// - `GET /health` - Database reachability probe
///
/// `/items` without the trailing slash is routed to the same handlers as `/items/`.
///
/// # Returns
/// A `Router<AppState>` without middleware; CORS and tracing layers are added by
/// [`crate::server::startup::build_router`].
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "MRV Evo", description = "MRV Evo API"), tags(
        (name = controller::item::ITEM_TAG, description = "Item catalogue routes"),
        (name = controller::health::HEALTH_TAG, description = "Service health routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::item::get_items,
            controller::item::create_item
        ))
        .routes(routes!(
            controller::item::get_item,
            controller::item::update_item,
            controller::item::delete_item
        ))
        .routes(routes!(controller::health::health))
        .split_for_parts();

    routes
        .route(
            "/items",
            get(controller::item::get_items).post(controller::item::create_item),
        )
        .merge(SwaggerUi::new("/docs").url("/openapi.json", api))
}

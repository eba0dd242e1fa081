//! End-to-end tests through the fully layered router.
//!
//! Requests are sent with `tower::ServiceExt::oneshot` so extractor rejections, routing and
//! the CORS policy are exercised exactly as a client would see them.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use mrv_evo::{
    model::{
        api::{ErrorDto, MessageDto},
        item::ItemDto,
    },
    server::{config::Config, startup},
};
use mrv_evo_test_utils::prelude::*;
use serde_json::json;
use tower::ServiceExt;

use crate::util::{body_json, TestContextExt};

const ALLOWED_ORIGIN: &str = "https://frontend.example.com";

fn app(test: &TestContext) -> Router {
    let config = Config::from_lookup(|key| match key {
        "DATABASE_URL" => Some("sqlite::memory:".to_string()),
        "CORS_ALLOWED_ORIGINS" => Some(ALLOWED_ORIGIN.to_string()),
        _ => None,
    })
    .unwrap();
    let cors = startup::build_cors(&config).unwrap();

    startup::build_router(test.into_app_state(), cors)
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    app.oneshot(request.body(body).unwrap()).await.unwrap()
}

/// Walks an item through its whole lifecycle.
///
/// Expected: create, read, update, list and delete all succeed; a final read is 404
#[tokio::test]
async fn item_lifecycle() -> Result<(), TestError> {
    let test = TestBuilder::new().with_item_table().build().await?;

    let resp = send(
        app(&test),
        Method::POST,
        "/items/",
        Some(json!({"name": "Hammer", "description": "Claw hammer", "category": "Tools"})),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let created: ItemDto = body_json(resp).await;

    let resp = send(app(&test), Method::GET, &format!("/items/{}", created.id), None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: ItemDto = body_json(resp).await;
    assert_eq!(fetched, created);

    let resp = send(
        app(&test),
        Method::PUT,
        &format!("/items/{}", created.id),
        Some(json!({"name": "Mallet", "description": "Rubber mallet", "category": "Tools"})),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: ItemDto = body_json(resp).await;
    assert_eq!(updated.name.as_deref(), Some("Mallet"));

    let resp = send(app(&test), Method::GET, "/items/", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let items: Vec<ItemDto> = body_json(resp).await;
    assert_eq!(items, vec![updated]);

    let resp = send(app(&test), Method::DELETE, &format!("/items/{}", created.id), None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let message: MessageDto = body_json(resp).await;
    assert_eq!(message.message, "Item deleted");

    let resp = send(app(&test), Method::GET, &format!("/items/{}", created.id), None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let error: ErrorDto = body_json(resp).await;
    assert_eq!(error.detail, "Item not found");

    Ok(())
}

/// Tests the column-named JSON keys on the wire.
///
/// Expected: keys `Id`, `Name`, `Description`, `Category`
#[tokio::test]
async fn responses_use_column_names() -> Result<(), TestError> {
    let test = TestBuilder::new().with_mock_items(1).build().await?;

    let resp = send(app(&test), Method::GET, "/items/1", None).await;

    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(
        body,
        json!({"Id": 1, "Name": "Item 1", "Description": "Description 1", "Category": "General"})
    );

    Ok(())
}

/// Tests the path without a trailing slash.
///
/// Expected: same handlers as `/items/`
#[tokio::test]
async fn items_without_trailing_slash() -> Result<(), TestError> {
    let test = TestBuilder::new().with_mock_items(2).build().await?;

    let resp = send(app(&test), Method::GET, "/items", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let items: Vec<ItemDto> = body_json(resp).await;
    assert_eq!(items.len(), 2);

    let resp = send(
        app(&test),
        Method::POST,
        "/items",
        Some(json!({"name": "Saw", "description": "Hand saw", "category": "Tools"})),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests request body validation.
///
/// Expected: 422 when a field is missing or has the wrong type, and nothing is stored
#[tokio::test]
async fn unprocessable_for_invalid_payload() -> Result<(), TestError> {
    let test = TestBuilder::new().with_item_table().build().await?;

    let resp = send(
        app(&test),
        Method::POST,
        "/items/",
        Some(json!({"name": "Hammer", "description": "Claw hammer"})),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let resp = send(
        app(&test),
        Method::PUT,
        "/items/1",
        Some(json!({"name": 5, "description": "Claw hammer", "category": "Tools"})),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let resp = send(app(&test), Method::GET, "/items/", None).await;
    let items: Vec<ItemDto> = body_json(resp).await;
    assert!(items.is_empty());

    Ok(())
}

/// Tests a request body that is not valid JSON.
///
/// Expected: 400 BAD_REQUEST from the JSON extractor, and nothing is stored
#[tokio::test]
async fn bad_request_for_malformed_json() -> Result<(), TestError> {
    let test = TestBuilder::new().with_item_table().build().await?;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/items/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"name": "Hammer", "description": "#))
        .unwrap();
    let resp = app(&test).oneshot(request).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = send(app(&test), Method::GET, "/items/", None).await;
    let items: Vec<ItemDto> = body_json(resp).await;
    assert!(items.is_empty());

    Ok(())
}

/// Tests a JSON body sent without a `Content-Type` header.
///
/// Expected: 415 UNSUPPORTED_MEDIA_TYPE from the JSON extractor, and nothing is stored
#[tokio::test]
async fn unsupported_media_type_without_content_type() -> Result<(), TestError> {
    let test = TestBuilder::new().with_item_table().build().await?;

    let body = json!({"name": "Hammer", "description": "Claw hammer", "category": "Tools"});
    let request = Request::builder()
        .method(Method::POST)
        .uri("/items/")
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = app(&test).oneshot(request).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

    let resp = send(app(&test), Method::GET, "/items/", None).await;
    let items: Vec<ItemDto> = body_json(resp).await;
    assert!(items.is_empty());

    Ok(())
}

/// Tests a non-integer item ID.
///
/// Expected: 400 BAD_REQUEST from the path extractor
#[tokio::test]
async fn bad_request_for_non_integer_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_item_table().build().await?;

    let resp = send(app(&test), Method::GET, "/items/abc", None).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests a CORS preflight from an allowed origin.
///
/// Expected: origin echoed back, credentials allowed, requested method & headers mirrored
#[tokio::test]
async fn cors_preflight_from_allowed_origin() -> Result<(), TestError> {
    let test = TestBuilder::new().with_item_table().build().await?;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/items/")
        .header(header::ORIGIN, ALLOWED_ORIGIN)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let resp = app(&test).oneshot(request).await.unwrap();

    let headers = resp.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        ALLOWED_ORIGIN
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
        "PUT"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap(),
        "content-type"
    );

    Ok(())
}

/// Tests a simple request from an origin that is not allowed.
///
/// Expected: request is served but no CORS headers are attached
#[tokio::test]
async fn cors_headers_absent_for_unknown_origin() -> Result<(), TestError> {
    let test = TestBuilder::new().with_item_table().build().await?;

    let request = Request::builder()
        .method(Method::GET)
        .uri("/items/")
        .header(header::ORIGIN, "https://attacker.example.com")
        .body(Body::empty())
        .unwrap();
    let resp = app(&test).oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());

    Ok(())
}

/// Tests the OpenAPI document.
///
/// Expected: every item route is documented
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = send(app(&test), Method::GET, "/openapi.json", None).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let doc: serde_json::Value = body_json(resp).await;
    let paths = doc["paths"].as_object().unwrap();
    assert!(paths.contains_key("/items/"));
    assert!(paths.contains_key("/items/{item_id}"));
    assert!(paths.contains_key("/health"));

    Ok(())
}

//! Tests for the get_items endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use mrv_evo::{model::item::ItemDto, server::controller::item::get_items};

use super::*;

/// Tests successful response with empty item list.
///
/// Expected: Ok with 200 OK response and an empty array
#[tokio::test]
async fn success_with_empty_list() -> Result<(), TestError> {
    let test = TestBuilder::new().with_item_table().build().await?;

    let result = get_items(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let items: Vec<ItemDto> = body_json(resp).await;
    assert!(items.is_empty());

    Ok(())
}

/// Tests successful response with multiple items.
///
/// Expected: Ok with 200 OK response listing every item in ID order
#[tokio::test]
async fn success_with_multiple_items() -> Result<(), TestError> {
    let test = TestBuilder::new().with_mock_items(3).build().await?;

    let result = get_items(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let items: Vec<ItemDto> = body_json(resp).await;
    let expected: Vec<ItemDto> = (1..=3)
        .map(|id| ItemDto::from(factory::mock_item_model(id)))
        .collect();
    assert_eq!(items, expected);

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Expected: Err with 500 INTERNAL_SERVER_ERROR response
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_items(State(test.into_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

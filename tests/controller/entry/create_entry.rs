//! Tests for the create_entry endpoint.
//!
//! Verifies entry creation against an existing playthrough, the 404 for a missing parent,
//! and validation of title and category.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::Game;
use pkmnlog::{
    model::{
        api::ErrorDto,
        playthrough::{Category, CreateEntryDto, EntryDto},
    },
    server::controller::entry::create_entry,
};
use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

/// Expect 201 with the stored entry
#[tokio::test]
async fn creates_entry() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_log_tables()
        .with_playthrough("Black 2 Challenge", Game::Black2)
        .build()
        .await?;
    let payload = CreateEntryDto {
        title: "Beat Cheren".to_string(),
        category: "badge".to_string(),
        description: Some("Basic Badge, Patrat carried".to_string()),
    };

    let result = create_entry(State(test.to_app_state()), Path(1), Json(payload)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let entry: EntryDto = json_body(resp).await;
    assert_eq!(entry.id, 1);
    assert_eq!(entry.playthrough_id, 1);
    assert_eq!(entry.category, Category::Badge);
    assert_eq!(
        entry.description.as_deref(),
        Some("Basic Badge, Patrat carried")
    );

    Ok(())
}

/// Expect 404 and nothing stored when the playthrough does not exist
#[tokio::test]
async fn not_found_for_missing_playthrough() -> Result<(), TestError> {
    let test = TestBuilder::new().with_log_tables().build().await?;
    let payload = CreateEntryDto {
        title: "Caught Groudon".to_string(),
        category: "catch".to_string(),
        description: None,
    };

    let result = create_entry(State(test.to_app_state()), Path(99), Json(payload)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let entries = entity::prelude::Entry::find().count(&test.db).await?;
    assert_eq!(entries, 0);

    Ok(())
}

/// Expect 400 for an empty title
#[tokio::test]
async fn bad_request_for_empty_title() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_log_tables()
        .with_playthrough("Scarlet", Game::Scarlet)
        .build()
        .await?;
    let payload = CreateEntryDto {
        title: String::new(),
        category: "note".to_string(),
        description: None,
    };

    let result = create_entry(State(test.to_app_state()), Path(1), Json(payload)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 for a category that is not a recognized member
#[tokio::test]
async fn bad_request_for_unknown_category() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_log_tables()
        .with_playthrough("Scarlet", Game::Scarlet)
        .build()
        .await?;
    let payload = CreateEntryDto {
        title: "Shiny hunting".to_string(),
        category: "shiny".to_string(),
        description: None,
    };

    let result = create_entry(State(test.to_app_state()), Path(1), Json(payload)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 with an error body when the category is left out of the request
#[tokio::test]
async fn bad_request_for_missing_category() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_log_tables()
        .with_playthrough("Scarlet", Game::Scarlet)
        .build()
        .await?;
    let payload: CreateEntryDto = serde_json::from_str(r#"{"title":"Picked Sprigatito"}"#).unwrap();

    let result = create_entry(State(test.to_app_state()), Path(1), Json(payload)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = json_body(resp).await;
    assert!(!error.error.is_empty());

    Ok(())
}

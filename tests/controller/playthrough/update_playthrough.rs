//! Tests for the update_playthrough endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{Duration, NaiveDate, Utc};
use entity::sea_orm_active_enums::Game as DbGame;
use pkmnlog::{
    model::{
        api::ErrorDto,
        playthrough::{Game, PlaythroughDto, UpdatePlaythroughDto},
    },
    server::controller::playthrough::update_playthrough,
};

use super::*;

/// Expect 200 with the new values and a refreshed updated_at
#[tokio::test]
async fn updates_playthrough() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_log_tables().build().await?;
    let last_week = Utc::now().naive_utc() - Duration::days(7);
    let original = test
        .playthrough()
        .insert_mock_playthrough_updated_at("Sapphire", DbGame::Sapphire, last_week)
        .await?;
    let payload = UpdatePlaythroughDto {
        title: "Alpha Sapphire".to_string(),
        game: "alpha_sapphire".to_string(),
        start_date: None,
    };

    let result =
        update_playthrough(State(test.to_app_state()), Path(original.id), Json(payload)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let playthrough: PlaythroughDto = json_body(resp).await;
    assert_eq!(playthrough.title, "Alpha Sapphire");
    assert_eq!(playthrough.game, Game::AlphaSapphire);
    assert_eq!(playthrough.start_date, original.start_date);
    assert!(playthrough.updated_at > original.updated_at);

    Ok(())
}

/// Expect 404 for a playthrough that does not exist
#[tokio::test]
async fn not_found_for_missing_playthrough() -> Result<(), TestError> {
    let test = TestBuilder::new().with_log_tables().build().await?;
    let payload = UpdatePlaythroughDto {
        title: "Ghost".to_string(),
        game: "platinum".to_string(),
        start_date: NaiveDate::from_ymd_opt(2009, 3, 22),
    };

    let result = update_playthrough(State(test.to_app_state()), Path(7), Json(payload)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 400 when the new title is empty
#[tokio::test]
async fn bad_request_for_empty_title() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_log_tables()
        .with_playthrough("Yellow", DbGame::Yellow)
        .build()
        .await?;
    let payload = UpdatePlaythroughDto {
        title: String::new(),
        game: "yellow".to_string(),
        start_date: None,
    };

    let result = update_playthrough(State(test.to_app_state()), Path(1), Json(payload)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 with an error body when the game is left out of the request
#[tokio::test]
async fn bad_request_for_missing_game() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_log_tables()
        .with_playthrough("Yellow", DbGame::Yellow)
        .build()
        .await?;
    let payload: UpdatePlaythroughDto = serde_json::from_str(r#"{"title":"Yellow"}"#).unwrap();

    let result = update_playthrough(State(test.to_app_state()), Path(1), Json(payload)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = json_body(resp).await;
    assert!(!error.error.is_empty());

    Ok(())
}

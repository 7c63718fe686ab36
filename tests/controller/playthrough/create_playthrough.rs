//! Tests for the create_playthrough endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{NaiveDate, Utc};
use pkmnlog::{
    model::{
        api::ErrorDto,
        playthrough::{CreatePlaythroughDto, Game, PlaythroughDto},
    },
    server::controller::playthrough::create_playthrough,
};

use super::*;

/// Expect 201 with the stored playthrough, start date defaulting to today
#[tokio::test]
async fn creates_playthrough_with_default_start_date() -> Result<(), TestError> {
    let test = TestBuilder::new().with_log_tables().build().await?;
    let payload = CreatePlaythroughDto {
        title: "Emerald Run".to_string(),
        game: "emerald".to_string(),
        start_date: None,
    };

    let result = create_playthrough(State(test.to_app_state()), Json(payload)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let playthrough: PlaythroughDto = json_body(resp).await;
    assert_eq!(playthrough.id, 1);
    assert_eq!(playthrough.title, "Emerald Run");
    assert_eq!(playthrough.game, Game::Emerald);
    assert_eq!(playthrough.start_date, Utc::now().date_naive());

    Ok(())
}

/// Expect an explicit start date to be kept
#[tokio::test]
async fn keeps_explicit_start_date() -> Result<(), TestError> {
    let test = TestBuilder::new().with_log_tables().build().await?;
    let start_date = NaiveDate::from_ymd_opt(2004, 9, 16).unwrap();
    let payload = CreatePlaythroughDto {
        title: "Nostalgia".to_string(),
        game: "fire_red".to_string(),
        start_date: Some(start_date),
    };

    let result = create_playthrough(State(test.to_app_state()), Json(payload)).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let playthrough: PlaythroughDto = json_body(resp).await;
    assert_eq!(playthrough.start_date, start_date);
    assert_eq!(playthrough.game, Game::FireRed);

    Ok(())
}

/// Expect 400 with an error message for an empty title
#[tokio::test]
async fn bad_request_for_empty_title() -> Result<(), TestError> {
    let test = TestBuilder::new().with_log_tables().build().await?;
    let payload = CreatePlaythroughDto {
        title: "   ".to_string(),
        game: "emerald".to_string(),
        start_date: None,
    };

    let result = create_playthrough(State(test.to_app_state()), Json(payload)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = json_body(resp).await;
    assert!(!error.error.is_empty());

    Ok(())
}

/// Expect 400 for a game that is not a recognized member
#[tokio::test]
async fn bad_request_for_unknown_game() -> Result<(), TestError> {
    let test = TestBuilder::new().with_log_tables().build().await?;
    let payload = CreatePlaythroughDto {
        title: "Bootleg".to_string(),
        game: "pokemon_purple".to_string(),
        start_date: None,
    };

    let result = create_playthrough(State(test.to_app_state()), Json(payload)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 500 when the playthrough table is missing
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let payload = CreatePlaythroughDto {
        title: "Emerald Run".to_string(),
        game: "emerald".to_string(),
        start_date: None,
    };

    let result = create_playthrough(State(test.to_app_state()), Json(payload)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

/// Expect 400 with an error body when the title is left out of the request
#[tokio::test]
async fn bad_request_for_missing_title() -> Result<(), TestError> {
    let test = TestBuilder::new().with_log_tables().build().await?;
    let payload: CreatePlaythroughDto = serde_json::from_str(r#"{"game":"emerald"}"#).unwrap();

    let result = create_playthrough(State(test.to_app_state()), Json(payload)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = json_body(resp).await;
    assert!(!error.error.is_empty());

    Ok(())
}

/// Expect 400 with an error body when the game is left out of the request
#[tokio::test]
async fn bad_request_for_missing_game() -> Result<(), TestError> {
    let test = TestBuilder::new().with_log_tables().build().await?;
    let payload: CreatePlaythroughDto = serde_json::from_str(r#"{"title":"Run"}"#).unwrap();

    let result = create_playthrough(State(test.to_app_state()), Json(payload)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = json_body(resp).await;
    assert!(!error.error.is_empty());

    Ok(())
}

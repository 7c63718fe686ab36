//! Tests for the list_playthroughs endpoint.
//!
//! Verifies that playthroughs are listed most recently updated first, that an empty
//! database yields an empty list, and that database failures surface as 500.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::Game;
use pkmnlog::{model::playthrough::PlaythroughDto, server::controller::playthrough::list_playthroughs};

use super::*;

/// Expect 200 with an empty list when no playthroughs exist
#[tokio::test]
async fn returns_empty_list() -> Result<(), TestError> {
    let test = TestBuilder::new().with_log_tables().build().await?;

    let result = list_playthroughs(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let playthroughs: Vec<PlaythroughDto> = json_body(resp).await;
    assert!(playthroughs.is_empty());

    Ok(())
}

/// Expect playthroughs ordered by updated_at descending
#[tokio::test]
async fn returns_most_recently_updated_first() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_log_tables().build().await?;
    let now = Utc::now().naive_utc();
    test.playthrough()
        .insert_mock_playthrough_updated_at("Old Ruby", Game::Ruby, now - Duration::days(3))
        .await?;
    test.playthrough()
        .insert_mock_playthrough_updated_at("Fresh Violet", Game::Violet, now)
        .await?;
    test.playthrough()
        .insert_mock_playthrough_updated_at("Middle Platinum", Game::Platinum, now - Duration::days(1))
        .await?;

    let result = list_playthroughs(State(test.to_app_state())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let playthroughs: Vec<PlaythroughDto> = json_body(resp).await;
    let titles: Vec<&str> = playthroughs.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Fresh Violet", "Middle Platinum", "Old Ruby"]);

    Ok(())
}

/// Expect 500 when the playthrough table is missing
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = list_playthroughs(State(test.to_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

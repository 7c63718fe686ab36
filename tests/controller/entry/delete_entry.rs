//! Tests for the delete_entry endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{Category, Game};
use pkmnlog::{
    model::playthrough::PlaythroughDetailDto,
    server::controller::{entry::delete_entry, playthrough::get_playthrough},
};
use sea_orm::EntityTrait;

use super::*;

/// Expect 204 and only the targeted entry removed
#[tokio::test]
async fn deletes_entry() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_log_tables()
        .with_playthrough("Legends Z-A", Game::LegendsZa)
        .with_entry(1, Category::Milestone)
        .with_entry(1, Category::Item)
        .build()
        .await?;

    let result = delete_entry(State(test.to_app_state()), Path(1)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let remaining = entity::prelude::Entry::find().all(&test.db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, 2);

    Ok(())
}

/// Expect 404 for an entry that does not exist
#[tokio::test]
async fn not_found_for_missing_entry() -> Result<(), TestError> {
    let test = TestBuilder::new().with_log_tables().build().await?;

    let result = delete_entry(State(test.to_app_state()), Path(5)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect the playthrough served after the delete to carry a refreshed updated_at
#[tokio::test]
async fn refreshes_playthrough_updated_at() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_log_tables().build().await?;
    let last_week = Utc::now().naive_utc() - Duration::days(7);
    let playthrough = test
        .playthrough()
        .insert_mock_playthrough_updated_at("Moon", Game::Moon, last_week)
        .await?;
    let entry = test
        .playthrough()
        .insert_mock_entry(playthrough.id, "Got Rowlet", Category::Milestone)
        .await?;

    let result = delete_entry(State(test.to_app_state()), Path(entry.id)).await;
    assert_eq!(result.unwrap().into_response().status(), StatusCode::NO_CONTENT);

    let resp = get_playthrough(State(test.to_app_state()), Path(playthrough.id))
        .await
        .unwrap()
        .into_response();
    let detail: PlaythroughDetailDto = json_body(resp).await;
    assert!(detail.entries.is_empty());
    assert!(detail.playthrough.updated_at > playthrough.updated_at);

    Ok(())
}

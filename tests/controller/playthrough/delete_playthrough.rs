//! Tests for the delete_playthrough endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::sea_orm_active_enums::{Category, Game};
use pkmnlog::server::controller::playthrough::delete_playthrough;
use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

/// Expect 204 and the playthrough removed together with its entries
#[tokio::test]
async fn deletes_playthrough_and_entries() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_log_tables()
        .with_playthrough("Sword", Game::Sword)
        .with_playthrough("Shield", Game::Shield)
        .with_entry(1, Category::Catch)
        .with_entry(1, Category::Evolution)
        .with_entry(2, Category::Trade)
        .build()
        .await?;

    let result = delete_playthrough(State(test.to_app_state()), Path(1)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let playthroughs = entity::prelude::Playthrough::find().count(&test.db).await?;
    let entries = entity::prelude::Entry::find().all(&test.db).await?;
    assert_eq!(playthroughs, 1);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].playthrough_id, 2);

    Ok(())
}

/// Expect 404 for a playthrough that does not exist
#[tokio::test]
async fn not_found_for_missing_playthrough() -> Result<(), TestError> {
    let test = TestBuilder::new().with_log_tables().build().await?;

    let result = delete_playthrough(State(test.to_app_state()), Path(3)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

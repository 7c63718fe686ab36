//! Tests for the get_playthrough endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::sea_orm_active_enums::{Category, Game};
use pkmnlog::{
    model::playthrough::PlaythroughDetailDto,
    server::controller::playthrough::get_playthrough,
};

use super::*;

/// Expect 200 with the playthrough and its entries, newest first
#[tokio::test]
async fn returns_playthrough_with_entries() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_log_tables()
        .with_playthrough("Crystal Nuzlocke", Game::Crystal)
        .with_entry(1, Category::Badge)
        .with_entry(1, Category::Catch)
        .build()
        .await?;

    let result = get_playthrough(State(test.to_app_state()), Path(1)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let detail: PlaythroughDetailDto = json_body(resp).await;
    assert_eq!(detail.playthrough.title, "Crystal Nuzlocke");
    let entry_ids: Vec<i32> = detail.entries.iter().map(|e| e.id).collect();
    assert_eq!(entry_ids, vec![2, 1]);
    assert!(detail.entries.iter().all(|e| e.playthrough_id == 1));

    Ok(())
}

/// Expect 404 for a playthrough that does not exist
#[tokio::test]
async fn not_found_for_missing_playthrough() -> Result<(), TestError> {
    let test = TestBuilder::new().with_log_tables().build().await?;

    let result = get_playthrough(State(test.to_app_state()), Path(42)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

//! End-to-end flow through the handlers: start a playthrough, log an entry, list.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use pkmnlog::{
    model::playthrough::{
        CreateEntryDto, CreatePlaythroughDto, EntryDto, Game, PlaythroughDetailDto,
        PlaythroughDto,
    },
    server::{
        controller::{
            entry::create_entry,
            playthrough::{create_playthrough, get_playthrough, list_playthroughs},
        },
        model::app::AppState,
    },
};

use super::*;

/// Expect the logged entry to show up on the playthrough and bump it in the listing
#[tokio::test]
async fn emerald_run() -> Result<(), TestError> {
    let test = TestBuilder::new().with_log_tables().build().await?;
    let state: AppState = test.to_app_state();

    let resp = create_playthrough(
        State(state.clone()),
        Json(CreatePlaythroughDto {
            title: "Emerald Run".to_string(),
            game: "emerald".to_string(),
            start_date: None,
        }),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let playthrough: PlaythroughDto = json_body(resp).await;
    assert_eq!(playthrough.id, 1);
    assert_eq!(playthrough.game, Game::Emerald);
    assert_eq!(playthrough.start_date, Utc::now().date_naive());

    let resp = create_entry(
        State(state.clone()),
        Path(playthrough.id),
        Json(CreateEntryDto {
            title: "Caught Groudon".to_string(),
            category: "catch".to_string(),
            description: None,
        }),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let entry: EntryDto = json_body(resp).await;
    assert_eq!(entry.id, 1);
    assert_eq!(entry.playthrough_id, 1);

    let resp = get_playthrough(State(state.clone()), Path(1))
        .await
        .unwrap()
        .into_response();
    let detail: PlaythroughDetailDto = json_body(resp).await;
    assert_eq!(detail.entries.len(), 1);
    assert_eq!(detail.entries[0].id, entry.id);
    assert_eq!(detail.entries[0].title, "Caught Groudon");

    let resp = list_playthroughs(State(state)).await.unwrap().into_response();
    let listed: Vec<PlaythroughDto> = json_body(resp).await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, 1);
    assert!(listed[0].updated_at > playthrough.updated_at);

    Ok(())
}

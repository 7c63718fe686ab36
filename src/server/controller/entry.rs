//! HTTP handlers for logging and deleting entries.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        playthrough::{CreateEntryDto, EntryDto},
    },
    server::{error::Error, model::app::AppState, service::entry::EntryService},
};

/// OpenAPI tag for entry routes
pub static ENTRY_TAG: &str = "entry";

/// Log a new entry against a playthrough
#[utoipa::path(
    post,
    path = "/api/playthroughs/{playthrough_id}/entries",
    tag = ENTRY_TAG,
    params(("playthrough_id" = i32, Path, description = "Playthrough ID")),
    request_body = CreateEntryDto,
    responses(
        (status = 201, description = "Entry created", body = EntryDto),
        (status = 400, description = "Empty title or unknown category", body = ErrorDto),
        (status = 404, description = "Playthrough not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_entry(
    State(state): State<AppState>,
    Path(playthrough_id): Path<i32>,
    Json(payload): Json<CreateEntryDto>,
) -> Result<impl IntoResponse, Error> {
    let entry = EntryService::new(&state.db)
        .create_entry(
            playthrough_id,
            &payload.title,
            &payload.category,
            payload.description,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(entry)).into_response())
}

/// Delete an entry
#[utoipa::path(
    delete,
    path = "/api/entries/{entry_id}",
    tag = ENTRY_TAG,
    params(("entry_id" = i32, Path, description = "Entry ID")),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 404, description = "Entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(entry_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    EntryService::new(&state.db).delete_entry(entry_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

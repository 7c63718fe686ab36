//! HTTP handlers for listing, creating, reading, updating and deleting playthroughs.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        playthrough::{
            CreatePlaythroughDto, PlaythroughDetailDto, PlaythroughDto, UpdatePlaythroughDto,
        },
    },
    server::{error::Error, model::app::AppState, service::playthrough::PlaythroughService},
};

/// OpenAPI tag for playthrough routes
pub static PLAYTHROUGH_TAG: &str = "playthrough";

/// List all playthroughs, most recently updated first
#[utoipa::path(
    get,
    path = "/api/playthroughs",
    tag = PLAYTHROUGH_TAG,
    responses(
        (status = 200, description = "Success when listing playthroughs", body = Vec<PlaythroughDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_playthroughs(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let playthroughs = PlaythroughService::new(&state.db)
        .list_playthroughs()
        .await?;

    Ok((StatusCode::OK, Json(playthroughs)).into_response())
}

/// Create a new playthrough
///
/// The start date defaults to today when omitted.
#[utoipa::path(
    post,
    path = "/api/playthroughs",
    tag = PLAYTHROUGH_TAG,
    request_body = CreatePlaythroughDto,
    responses(
        (status = 201, description = "Playthrough created", body = PlaythroughDto),
        (status = 400, description = "Empty title or unknown game", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_playthrough(
    State(state): State<AppState>,
    Json(payload): Json<CreatePlaythroughDto>,
) -> Result<impl IntoResponse, Error> {
    let playthrough = PlaythroughService::new(&state.db)
        .create_playthrough(&payload.title, &payload.game, payload.start_date)
        .await?;

    Ok((StatusCode::CREATED, Json(playthrough)).into_response())
}

/// Get a playthrough with its entries
#[utoipa::path(
    get,
    path = "/api/playthroughs/{playthrough_id}",
    tag = PLAYTHROUGH_TAG,
    params(("playthrough_id" = i32, Path, description = "Playthrough ID")),
    responses(
        (status = 200, description = "Success when retrieving playthrough", body = PlaythroughDetailDto),
        (status = 404, description = "Playthrough not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_playthrough(
    State(state): State<AppState>,
    Path(playthrough_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let playthrough = PlaythroughService::new(&state.db)
        .get_playthrough(playthrough_id)
        .await?;

    Ok((StatusCode::OK, Json(playthrough)).into_response())
}

/// Update a playthrough's title, game and start date
#[utoipa::path(
    put,
    path = "/api/playthroughs/{playthrough_id}",
    tag = PLAYTHROUGH_TAG,
    params(("playthrough_id" = i32, Path, description = "Playthrough ID")),
    request_body = UpdatePlaythroughDto,
    responses(
        (status = 200, description = "Playthrough updated", body = PlaythroughDto),
        (status = 400, description = "Empty title or unknown game", body = ErrorDto),
        (status = 404, description = "Playthrough not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_playthrough(
    State(state): State<AppState>,
    Path(playthrough_id): Path<i32>,
    Json(payload): Json<UpdatePlaythroughDto>,
) -> Result<impl IntoResponse, Error> {
    let playthrough = PlaythroughService::new(&state.db)
        .update_playthrough(
            playthrough_id,
            &payload.title,
            &payload.game,
            payload.start_date,
        )
        .await?;

    Ok((StatusCode::OK, Json(playthrough)).into_response())
}

/// Delete a playthrough and all of its entries
#[utoipa::path(
    delete,
    path = "/api/playthroughs/{playthrough_id}",
    tag = PLAYTHROUGH_TAG,
    params(("playthrough_id" = i32, Path, description = "Playthrough ID")),
    responses(
        (status = 204, description = "Playthrough deleted"),
        (status = 404, description = "Playthrough not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_playthrough(
    State(state): State<AppState>,
    Path(playthrough_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    PlaythroughService::new(&state.db)
        .delete_playthrough(playthrough_id)
        .await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

//! Browser-side calls to the playthrough API.

use reqwasm::http::{Request, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    client::util::error::message_from_body,
    model::playthrough::{
        CreateEntryDto, CreatePlaythroughDto, EntryDto, PlaythroughDetailDto, PlaythroughDto,
    },
};

/// Retrieve all playthroughs, most recently updated first
pub async fn get_playthroughs() -> Result<Vec<PlaythroughDto>, String> {
    let response = Request::get("/api/playthroughs")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    parse_json(response, 200).await
}

/// Retrieve a playthrough with its entries
pub async fn get_playthrough(playthrough_id: i32) -> Result<PlaythroughDetailDto, String> {
    let response = Request::get(&format!("/api/playthroughs/{}", playthrough_id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    parse_json(response, 200).await
}

pub async fn create_playthrough(payload: &CreatePlaythroughDto) -> Result<PlaythroughDto, String> {
    let response = post_json("/api/playthroughs", payload).await?;

    parse_json(response, 201).await
}

pub async fn create_entry(
    playthrough_id: i32,
    payload: &CreateEntryDto,
) -> Result<EntryDto, String> {
    let response =
        post_json(&format!("/api/playthroughs/{}/entries", playthrough_id), payload).await?;

    parse_json(response, 201).await
}

pub async fn delete_playthrough(playthrough_id: i32) -> Result<(), String> {
    delete(&format!("/api/playthroughs/{}", playthrough_id)).await
}

pub async fn delete_entry(entry_id: i32) -> Result<(), String> {
    delete(&format!("/api/entries/{}", entry_id)).await
}

async fn post_json<T: Serialize>(url: &str, payload: &T) -> Result<Response, String> {
    let body = serde_json::to_string(payload)
        .map_err(|e| format!("Failed to serialize request: {}", e))?;

    Request::post(url)
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))
}

async fn delete(url: &str) -> Result<(), String> {
    let response = Request::delete(url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        204 => Ok(()),
        _ => Err(error_message(response).await),
    }
}

async fn parse_json<T: DeserializeOwned>(response: Response, expected: u16) -> Result<T, String> {
    if response.status() != expected {
        return Err(error_message(response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Reads the body once and prefers the server's `ErrorDto` message over the raw text.
async fn error_message(response: Response) -> String {
    let status = response.status();

    match response.text().await {
        Ok(body) => message_from_body(status, &body),
        Err(e) => format!("Request failed with status {}: {}", status, e),
    }
}

//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with axum extractors against an in-memory database,
//! verifying status codes, response bodies and error mapping for every API endpoint.

mod entry;
mod playthrough;
mod scenario;

use axum::response::Response;
use pkmnlog_test_utils::prelude::*;
use serde::de::DeserializeOwned;

/// Reads a JSON response body into `T`.
async fn json_body<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}

//! Missing records, answered with 404 Not Found.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// A request referenced a record that is not in the database.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum NotFoundError {
    /// No playthrough exists with this ID.
    #[error("Playthrough {0} not found")]
    Playthrough(i32),
    /// No entry exists with this ID.
    #[error("Entry {0} not found")]
    Entry(i32),
}

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

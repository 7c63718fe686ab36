//! Rejected request input, answered with 400 Bad Request.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// A request field was missing or held a value outside its allowed set.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Title was empty or only whitespace.
    #[error("Title must not be empty")]
    EmptyTitle,
    /// Title exceeded the column length.
    #[error("Title must be at most {max} characters, got {len}")]
    TitleTooLong {
        /// Length of the submitted title in characters.
        len: usize,
        /// Maximum accepted length.
        max: usize,
    },
    /// Game was not one of the supported titles.
    #[error("Unrecognized game: {0:?}")]
    UnknownGame(String),
    /// Category was not one of the supported entry categories.
    #[error("Unrecognized category: {0:?}")]
    UnknownCategory(String),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Validation error: {}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

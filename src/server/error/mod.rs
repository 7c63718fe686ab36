//! Error types for the PkmnLog server application.
//!
//! This module provides the error handling system for the server, with specialized error types
//! for configuration, input validation and missing records. All errors implement
//! `IntoResponse` for Axum HTTP responses and use `thiserror` for their definitions.

pub mod config;
pub mod not_found;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, not_found::NotFoundError, validation::ValidationError},
};

/// Main error type for the PkmnLog server application.
///
/// Aggregates the domain-specific error types and database errors into a single type so that
/// services and controllers can propagate them with `?`. The `IntoResponse` implementation maps
/// each variant to the matching HTTP response.
///
/// # Error Categories
/// - Configuration errors (invalid environment variables)
/// - Validation errors (empty or overlong titles, unknown game or category)
/// - Not found errors (missing playthrough or entry)
/// - Database errors (query failures, connection issues, constraint violations)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Request contained a missing or invalid field.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Request referenced a record that does not exist.
    #[error(transparent)]
    NotFoundError(#[from] NotFoundError),
    /// Internal error indicating a bug in PkmnLog's code.
    #[error("Internal error, this indicates a bug in PkmnLog: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For validation failures
/// - 404 Not Found - For missing playthroughs or entries
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::NotFoundError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

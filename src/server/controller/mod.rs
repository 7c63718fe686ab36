//! HTTP controller endpoints for the PkmnLog web API.
//!
//! This module contains Axum handlers for playthroughs and their entries. Controllers extract
//! request data, delegate to the services, and convert results into JSON responses. They use
//! utoipa for OpenAPI documentation.

pub mod entry;
pub mod playthrough;

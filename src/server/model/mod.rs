//! Server application models and type definitions.
//!
//! This module contains the application state shared with HTTP handlers, type aliases for the
//! SeaORM entity models, and conversions from database models into the API DTOs.

pub mod app;
pub mod db;
pub mod playthrough;

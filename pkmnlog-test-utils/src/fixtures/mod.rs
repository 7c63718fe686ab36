//! Test fixture modules for database record creation.
//!
//! - `playthrough` - Insert playthrough and entry records into the test database
//! - `factory` - Build in-memory models without touching the database

pub mod factory;
pub mod playthrough;

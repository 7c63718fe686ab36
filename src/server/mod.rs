//! Server application core modules.
//!
//! This module contains all server-side functionality for PkmnLog: configuration, database
//! startup, the playthrough and entry repositories, the services that validate and coordinate
//! writes, and the HTTP controllers exposing them as a JSON API.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;

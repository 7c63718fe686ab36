//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations for playthroughs and
//! their entries. They are generic over [`sea_orm::ConnectionTrait`] so services can run them
//! either directly against the connection pool or inside a transaction.

pub mod entry;
pub mod playthrough;

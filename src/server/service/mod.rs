//! Service layer for validation and write coordination.
//!
//! Services validate request input, enforce that entries always reference an existing
//! playthrough, and run multi-step writes in a single transaction so that a playthrough's
//! `updated_at` moves together with the entry writes that touch it.

pub mod entry;
pub mod playthrough;

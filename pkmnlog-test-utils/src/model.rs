//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main pkmnlog crate to keep tests consistent.

/// Type alias for the playthrough database model.
pub type PlaythroughModel = entity::playthrough::Model;

/// Type alias for the entry database model.
pub type EntryModel = entity::entry::Model;

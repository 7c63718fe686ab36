//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM entity models so that services and controllers don't need
//! to name the generated `entity` crate paths directly.

/// Type alias for the playthrough database model.
///
/// # Fields (from `entity::playthrough::Model`)
/// - `id` - Primary key
/// - `title` - User-defined name, at most 120 characters
/// - `game` - Pokémon title being played
/// - `start_date` - Date the playthrough began
/// - `created_at` - Timestamp when the record was created
/// - `updated_at` - Timestamp of the last write to the playthrough or its entries
pub type PlaythroughModel = entity::playthrough::Model;

/// Type alias for the entry database model.
///
/// # Fields (from `entity::entry::Model`)
/// - `id` - Primary key
/// - `playthrough_id` - Foreign key to the owning playthrough
/// - `title` - Short title, at most 120 characters
/// - `category` - Kind of event recorded
/// - `description` - Optional free text
/// - `created_at` - Timestamp when the record was created
/// - `updated_at` - Timestamp of the last write to the record
pub type EntryModel = entity::entry::Model;

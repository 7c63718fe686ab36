//! Factory functions for generating mock database models.
//!
//! These are in-memory model instances that don't require database interaction, suitable for
//! unit tests of conversions and formatting.

use chrono::Utc;
use entity::sea_orm_active_enums::{Category, Game};

use crate::{
    constant::{TEST_ENTRY_TITLE, TEST_PLAYTHROUGH_TITLE},
    model::{EntryModel, PlaythroughModel},
};

/// Create a mock playthrough model started today.
///
/// # Arguments
/// - `id` - The playthrough ID
/// - `game` - The game being played
pub fn mock_playthrough_model(id: i32, game: Game) -> PlaythroughModel {
    let now = Utc::now().naive_utc();
    PlaythroughModel {
        id,
        title: TEST_PLAYTHROUGH_TITLE.to_string(),
        game,
        start_date: now.date(),
        created_at: now,
        updated_at: now,
    }
}

/// Create a mock entry model belonging to `playthrough_id`.
pub fn mock_entry_model(id: i32, playthrough_id: i32, category: Category) -> EntryModel {
    let now = Utc::now().naive_utc();
    EntryModel {
        id,
        playthrough_id,
        title: TEST_ENTRY_TITLE.to_string(),
        category,
        description: None,
        created_at: now,
        updated_at: now,
    }
}

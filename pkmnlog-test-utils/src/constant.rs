//! Standard values used by fixtures when a test doesn't care about the specific content.

/// Title given to playthroughs inserted by fixtures.
pub static TEST_PLAYTHROUGH_TITLE: &str = "Test Playthrough";

/// Title given to entries inserted by fixtures.
pub static TEST_ENTRY_TITLE: &str = "Test Entry";

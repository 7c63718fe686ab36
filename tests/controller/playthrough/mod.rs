//! Tests for playthrough controller endpoints.

mod create_playthrough;
mod delete_playthrough;
mod get_playthrough;
mod list_playthroughs;
mod update_playthrough;

use super::*;

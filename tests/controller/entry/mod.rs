//! Tests for entry controller endpoints.

mod create_entry;
mod delete_entry;

use super::*;

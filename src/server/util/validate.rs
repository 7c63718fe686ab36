//! Validation of user-supplied playthrough and entry fields.
//!
//! Titles are trimmed before checking, enumerations are parsed from their slug. Each function
//! returns the cleaned value ready to be written.

use crate::{
    model::playthrough::{Category, Game},
    server::error::validation::ValidationError,
};

/// Maximum title length in characters, matching the `title` column of both tables.
pub const MAX_TITLE_LEN: usize = 120;

/// Trims a title and checks it is present and fits the column.
///
/// # Returns
/// - `Ok(String)` - The trimmed title
/// - `Err(ValidationError::EmptyTitle)` - Title is empty or only whitespace
/// - `Err(ValidationError::TitleTooLong)` - Title exceeds [`MAX_TITLE_LEN`] characters
pub fn validate_title(title: &str) -> Result<String, ValidationError> {
    let title = title.trim();

    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }

    let len = title.chars().count();
    if len > MAX_TITLE_LEN {
        return Err(ValidationError::TitleTooLong {
            len,
            max: MAX_TITLE_LEN,
        });
    }

    Ok(title.to_string())
}

/// Parses a game from its slug, e.g. `"emerald"`.
pub fn parse_game(game: &str) -> Result<Game, ValidationError> {
    game.trim()
        .parse()
        .map_err(|_| ValidationError::UnknownGame(game.to_string()))
}

/// Parses an entry category from its slug, e.g. `"catch"`.
pub fn parse_category(category: &str) -> Result<Category, ValidationError> {
    category
        .trim()
        .parse()
        .map_err(|_| ValidationError::UnknownCategory(category.to_string()))
}

/// Blank descriptions are stored as NULL.
pub fn normalize_description(description: Option<String>) -> Option<String> {
    description.filter(|d| !d.trim().is_empty())
}

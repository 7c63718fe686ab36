//! Playthrough service layer.
//!
//! Lists, creates, reads, updates and deletes playthroughs. Deleting a playthrough removes its
//! entries first inside the same transaction, since the schema rejects orphaned entries rather
//! than cascading.

#[cfg(test)]
mod tests;

use chrono::NaiveDate;
use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::playthrough::{PlaythroughDetailDto, PlaythroughDto},
    server::{
        data::{entry::EntryRepository, playthrough::PlaythroughRepository},
        error::{not_found::NotFoundError, Error},
        util::{
            time::today,
            validate::{parse_game, validate_title},
        },
    },
};

/// Service for managing playthroughs.
pub struct PlaythroughService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlaythroughService<'a> {
    /// Creates a new instance of PlaythroughService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every playthrough, most recently updated first.
    ///
    /// # Returns
    /// - `Ok(Vec<PlaythroughDto>)` - All playthroughs, empty if none exist
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn list_playthroughs(&self) -> Result<Vec<PlaythroughDto>, Error> {
        let playthroughs = PlaythroughRepository::new(self.db).get_all().await?;

        Ok(playthroughs.into_iter().map(PlaythroughDto::from).collect())
    }

    /// Creates a new playthrough.
    ///
    /// # Arguments
    /// - `title` - Name of the playthrough, trimmed before storing
    /// - `game` - Slug of the game being played, e.g. `"emerald"`
    /// - `start_date` - Date the playthrough began, today (UTC) when `None`
    ///
    /// # Returns
    /// - `Ok(PlaythroughDto)` - The created playthrough
    /// - `Err(Error::ValidationError)` - Title is empty or too long, or the game is unknown
    /// - `Err(Error::DbErr)` - Database insert failed
    pub async fn create_playthrough(
        &self,
        title: &str,
        game: &str,
        start_date: Option<NaiveDate>,
    ) -> Result<PlaythroughDto, Error> {
        let title = validate_title(title)?;
        let game = parse_game(game)?;
        let start_date = start_date.unwrap_or_else(today);

        let playthrough = PlaythroughRepository::new(self.db)
            .create(title, game.into(), start_date)
            .await?;

        tracing::info!(playthrough_id = %playthrough.id, "Created playthrough");

        Ok(playthrough.into())
    }

    /// Retrieves a playthrough with its entries, newest entry first.
    ///
    /// # Returns
    /// - `Ok(PlaythroughDetailDto)` - The playthrough and its entries
    /// - `Err(Error::NotFoundError)` - No playthrough with this ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_playthrough(&self, playthrough_id: i32) -> Result<PlaythroughDetailDto, Error> {
        let Some((playthrough, entries)) = PlaythroughRepository::new(self.db)
            .get_with_entries(playthrough_id)
            .await?
        else {
            return Err(NotFoundError::Playthrough(playthrough_id).into());
        };

        Ok(PlaythroughDetailDto {
            playthrough: playthrough.into(),
            entries: entries.into_iter().map(Into::into).collect(),
        })
    }

    /// Updates title, game and optionally start date of a playthrough, refreshing `updated_at`.
    ///
    /// # Returns
    /// - `Ok(PlaythroughDto)` - The updated playthrough
    /// - `Err(Error::ValidationError)` - Title is empty or too long, or the game is unknown
    /// - `Err(Error::NotFoundError)` - No playthrough with this ID
    /// - `Err(Error::DbErr)` - Database update failed
    pub async fn update_playthrough(
        &self,
        playthrough_id: i32,
        title: &str,
        game: &str,
        start_date: Option<NaiveDate>,
    ) -> Result<PlaythroughDto, Error> {
        let title = validate_title(title)?;
        let game = parse_game(game)?;

        let Some(playthrough) = PlaythroughRepository::new(self.db)
            .update(playthrough_id, title, game.into(), start_date)
            .await?
        else {
            return Err(NotFoundError::Playthrough(playthrough_id).into());
        };

        tracing::info!(playthrough_id = %playthrough.id, "Updated playthrough");

        Ok(playthrough.into())
    }

    /// Deletes a playthrough together with all of its entries.
    ///
    /// # Returns
    /// - `Ok(())` - Playthrough and entries deleted
    /// - `Err(Error::NotFoundError)` - No playthrough with this ID
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was deleted
    pub async fn delete_playthrough(&self, playthrough_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let playthrough_repo = PlaythroughRepository::new(&txn);
        if playthrough_repo.get_by_id(playthrough_id).await?.is_none() {
            return Err(NotFoundError::Playthrough(playthrough_id).into());
        }

        let deleted_entries = EntryRepository::new(&txn)
            .delete_by_playthrough_id(playthrough_id)
            .await?;
        playthrough_repo.delete(playthrough_id).await?;

        txn.commit().await?;

        tracing::info!(
            playthrough_id = %playthrough_id,
            entries = %deleted_entries.rows_affected,
            "Deleted playthrough"
        );

        Ok(())
    }
}

//! Entry service layer.
//!
//! Every entry write refreshes the parent playthrough's `updated_at` in the same transaction,
//! which keeps the playthrough list ordered by the most recent activity.

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::playthrough::EntryDto,
    server::{
        data::{entry::EntryRepository, playthrough::PlaythroughRepository},
        error::{not_found::NotFoundError, Error},
        util::validate::{normalize_description, parse_category, validate_title},
    },
};

/// Service for logging entries against playthroughs.
pub struct EntryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EntryService<'a> {
    /// Creates a new instance of EntryService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Logs a new entry against a playthrough.
    ///
    /// Input is validated before the database is touched, so an invalid entry for a missing
    /// playthrough reports the validation error.
    ///
    /// # Arguments
    /// - `playthrough_id` - ID of the playthrough the entry belongs to
    /// - `title` - Short title of the event, trimmed before storing
    /// - `category` - Slug of the entry category, e.g. `"catch"`
    /// - `description` - Optional free text, blank text is stored as `None`
    ///
    /// # Returns
    /// - `Ok(EntryDto)` - The created entry
    /// - `Err(Error::ValidationError)` - Title is empty or too long, or the category is unknown
    /// - `Err(Error::NotFoundError)` - No playthrough with this ID
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was written
    pub async fn create_entry(
        &self,
        playthrough_id: i32,
        title: &str,
        category: &str,
        description: Option<String>,
    ) -> Result<EntryDto, Error> {
        let title = validate_title(title)?;
        let category = parse_category(category)?;
        let description = normalize_description(description);

        let txn = self.db.begin().await?;

        // Refreshing the parent first doubles as the existence check
        if PlaythroughRepository::new(&txn)
            .touch(playthrough_id)
            .await?
            .is_none()
        {
            return Err(NotFoundError::Playthrough(playthrough_id).into());
        }

        let entry = EntryRepository::new(&txn)
            .create(playthrough_id, title, category.into(), description)
            .await?;

        txn.commit().await?;

        tracing::info!(
            entry_id = %entry.id,
            playthrough_id = %playthrough_id,
            "Created entry"
        );

        Ok(entry.into())
    }

    /// Deletes an entry and refreshes its playthrough's `updated_at`.
    ///
    /// # Returns
    /// - `Ok(())` - Entry deleted
    /// - `Err(Error::NotFoundError)` - No entry with this ID
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was deleted
    pub async fn delete_entry(&self, entry_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let entry_repo = EntryRepository::new(&txn);
        let Some(entry) = entry_repo.get_by_id(entry_id).await? else {
            return Err(NotFoundError::Entry(entry_id).into());
        };

        entry_repo.delete(entry.id).await?;
        PlaythroughRepository::new(&txn)
            .touch(entry.playthrough_id)
            .await?
            .ok_or_else(|| {
                // Only reachable if the foreign key on entry.playthrough_id is not enforced
                Error::InternalError(format!(
                    "Entry ID {} referenced missing playthrough ID {}",
                    entry.id, entry.playthrough_id
                ))
            })?;

        txn.commit().await?;

        tracing::info!(
            entry_id = %entry.id,
            playthrough_id = %entry.playthrough_id,
            "Deleted entry"
        );

        Ok(())
    }
}

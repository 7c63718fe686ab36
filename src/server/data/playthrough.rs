//! Database access for the `playthrough` table.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::Game;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, ModelTrait, QueryOrder,
};

use crate::server::{
    model::db::{EntryModel, PlaythroughModel},
    util::time::now,
};

/// Repository for playthrough records, usable inside or outside a transaction.
pub struct PlaythroughRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlaythroughRepository<'a, C> {
    /// Creates a new instance of [`PlaythroughRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new playthrough with both timestamps set to now
    pub async fn create(
        &self,
        title: String,
        game: Game,
        start_date: NaiveDate,
    ) -> Result<PlaythroughModel, DbErr> {
        let now = now();
        let playthrough = entity::playthrough::ActiveModel {
            title: ActiveValue::Set(title),
            game: ActiveValue::Set(game),
            start_date: ActiveValue::Set(start_date),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        playthrough.insert(self.db).await
    }

    /// Gets all playthroughs, most recently updated first
    ///
    /// Ties on `updated_at` are broken by the newest ID first.
    pub async fn get_all(&self) -> Result<Vec<PlaythroughModel>, DbErr> {
        entity::prelude::Playthrough::find()
            .order_by_desc(entity::playthrough::Column::UpdatedAt)
            .order_by_desc(entity::playthrough::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a playthrough by ID
    pub async fn get_by_id(&self, playthrough_id: i32) -> Result<Option<PlaythroughModel>, DbErr> {
        entity::prelude::Playthrough::find_by_id(playthrough_id)
            .one(self.db)
            .await
    }

    /// Gets a playthrough with its entries, newest entry first
    pub async fn get_with_entries(
        &self,
        playthrough_id: i32,
    ) -> Result<Option<(PlaythroughModel, Vec<EntryModel>)>, DbErr> {
        let Some(playthrough) = self.get_by_id(playthrough_id).await? else {
            return Ok(None);
        };

        let entries = playthrough
            .find_related(entity::prelude::Entry)
            .order_by_desc(entity::entry::Column::CreatedAt)
            .order_by_desc(entity::entry::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some((playthrough, entries)))
    }

    /// Replaces title & game and refreshes `updated_at`
    ///
    /// The stored start date is kept when `start_date` is `None`. Returns `Ok(None)` if the
    /// playthrough does not exist.
    pub async fn update(
        &self,
        playthrough_id: i32,
        title: String,
        game: Game,
        start_date: Option<NaiveDate>,
    ) -> Result<Option<PlaythroughModel>, DbErr> {
        let Some(playthrough) = self.get_by_id(playthrough_id).await? else {
            return Ok(None);
        };

        let mut playthrough_am = playthrough.into_active_model();
        playthrough_am.title = ActiveValue::Set(title);
        playthrough_am.game = ActiveValue::Set(game);
        if let Some(start_date) = start_date {
            playthrough_am.start_date = ActiveValue::Set(start_date);
        }
        playthrough_am.updated_at = ActiveValue::Set(now());

        let playthrough = playthrough_am.update(self.db).await?;

        Ok(Some(playthrough))
    }

    /// Refreshes `updated_at` without changing any other field
    ///
    /// Returns `Ok(None)` if the playthrough does not exist.
    pub async fn touch(&self, playthrough_id: i32) -> Result<Option<PlaythroughModel>, DbErr> {
        let Some(playthrough) = self.get_by_id(playthrough_id).await? else {
            return Ok(None);
        };

        let mut playthrough_am = playthrough.into_active_model();
        playthrough_am.updated_at = ActiveValue::Set(now());

        let playthrough = playthrough_am.update(self.db).await?;

        Ok(Some(playthrough))
    }

    /// Deletes a playthrough
    ///
    /// Fails with a foreign key violation while entries still reference the playthrough.
    /// Returns OK regardless of the playthrough existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, playthrough_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Playthrough::delete_by_id(playthrough_id)
            .exec(self.db)
            .await
    }
}

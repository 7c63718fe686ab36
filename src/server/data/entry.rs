//! Database access for the `entry` table.

use entity::sea_orm_active_enums::Category;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::{model::db::EntryModel, util::time::now};

/// Repository for entry records, usable inside or outside a transaction.
pub struct EntryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EntryRepository<'a, C> {
    /// Creates a new instance of [`EntryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new entry for a playthrough
    ///
    /// Fails with a foreign key violation if the playthrough does not exist.
    pub async fn create(
        &self,
        playthrough_id: i32,
        title: String,
        category: Category,
        description: Option<String>,
    ) -> Result<EntryModel, DbErr> {
        let now = now();
        let entry = entity::entry::ActiveModel {
            playthrough_id: ActiveValue::Set(playthrough_id),
            title: ActiveValue::Set(title),
            category: ActiveValue::Set(category),
            description: ActiveValue::Set(description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entry.insert(self.db).await
    }

    /// Gets an entry by ID
    pub async fn get_by_id(&self, entry_id: i32) -> Result<Option<EntryModel>, DbErr> {
        entity::prelude::Entry::find_by_id(entry_id)
            .one(self.db)
            .await
    }

    /// Gets all entries of a playthrough, newest first
    pub async fn get_by_playthrough_id(
        &self,
        playthrough_id: i32,
    ) -> Result<Vec<EntryModel>, DbErr> {
        entity::prelude::Entry::find()
            .filter(entity::entry::Column::PlaythroughId.eq(playthrough_id))
            .order_by_desc(entity::entry::Column::CreatedAt)
            .order_by_desc(entity::entry::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes an entry
    ///
    /// Returns OK regardless of entry existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, entry_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Entry::delete_by_id(entry_id)
            .exec(self.db)
            .await
    }

    /// Deletes every entry of a playthrough
    pub async fn delete_by_playthrough_id(
        &self,
        playthrough_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::Entry::delete_many()
            .filter(entity::entry::Column::PlaythroughId.eq(playthrough_id))
            .exec(self.db)
            .await
    }
}

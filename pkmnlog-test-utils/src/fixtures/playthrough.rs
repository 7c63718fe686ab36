//! Playthrough and entry fixture utilities.

use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::{Category, Game};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{EntryModel, PlaythroughModel},
    TestContext,
};

impl TestContext {
    /// Access playthrough and entry fixture helpers.
    pub fn playthrough<'a>(&'a mut self) -> PlaythroughFixtures<'a> {
        PlaythroughFixtures { setup: self }
    }
}

/// Inserts playthrough and entry records directly, bypassing the application services.
pub struct PlaythroughFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> PlaythroughFixtures<'a> {
    /// Insert a playthrough started today with both timestamps set to now.
    pub async fn insert_mock_playthrough(
        &self,
        title: &str,
        game: Game,
    ) -> Result<PlaythroughModel, TestError> {
        self.insert_mock_playthrough_updated_at(title, game, Utc::now().naive_utc())
            .await
    }

    /// Insert a playthrough with an explicit `updated_at`, for ordering tests.
    pub async fn insert_mock_playthrough_updated_at(
        &self,
        title: &str,
        game: Game,
        updated_at: NaiveDateTime,
    ) -> Result<PlaythroughModel, TestError> {
        Ok(
            entity::prelude::Playthrough::insert(entity::playthrough::ActiveModel {
                title: ActiveValue::Set(title.to_string()),
                game: ActiveValue::Set(game),
                start_date: ActiveValue::Set(updated_at.date()),
                created_at: ActiveValue::Set(updated_at),
                updated_at: ActiveValue::Set(updated_at),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert an entry without a description for an existing playthrough.
    pub async fn insert_mock_entry(
        &self,
        playthrough_id: i32,
        title: &str,
        category: Category,
    ) -> Result<EntryModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Entry::insert(entity::entry::ActiveModel {
                playthrough_id: ActiveValue::Set(playthrough_id),
                title: ActiveValue::Set(title.to_string()),
                category: ActiveValue::Set(category),
                description: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}

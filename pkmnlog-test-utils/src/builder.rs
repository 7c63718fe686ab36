//! Declarative test builder for phase 1 setup.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use entity::sea_orm_active_enums::{Category, Game};
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{constant::TEST_ENTRY_TITLE, error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and record
/// fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_log_tables: bool,

    // Database fixtures to insert, in order
    playthroughs: Vec<(String, Game)>,
    entries: Vec<(i32, Category)>, // (playthrough_id, category)
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_log_tables: false,
            playthroughs: Vec::new(),
            entries: Vec::new(),
        }
    }

    /// Add the playthrough and entry tables to the test database.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_log_tables(mut self) -> Self {
        self.include_log_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pkmnlog_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), pkmnlog_test_utils::TestError> {
    /// // Only the playthrough table, so entry queries fail
    /// let test = TestBuilder::new().with_table(Playthrough).build().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a playthrough into the database during `build()`.
    ///
    /// Playthroughs are inserted in the order they are declared, so the first one receives
    /// ID 1, the second ID 2 and so on.
    pub fn with_playthrough(mut self, title: &str, game: Game) -> Self {
        self.playthroughs.push((title.to_string(), game));
        self
    }

    /// Insert an entry for a playthrough during `build()`.
    ///
    /// Entries are inserted after all declared playthroughs, so `playthrough_id` may refer to
    /// any of them.
    pub fn with_entry(mut self, playthrough_id: i32, category: Category) -> Self {
        self.entries.push((playthrough_id, category));
        self
    }

    /// Build the test context, creating tables and inserting fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Ready-to-use test context
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_log_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Playthrough),
                schema.create_table_from_entity(entity::prelude::Entry),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (title, game) in self.playthroughs {
            setup
                .playthrough()
                .insert_mock_playthrough(&title, game)
                .await?;
        }

        for (playthrough_id, category) in self.entries {
            setup
                .playthrough()
                .insert_mock_entry(playthrough_id, TEST_ENTRY_TITLE, category)
                .await?;
        }

        Ok(setup)
    }
}

use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251018_000001_playthrough::Playthrough;

static IDX_ENTRY_PLAYTHROUGH_ID: &str = "idx-entry-playthrough_id";
static FK_ENTRY_PLAYTHROUGH_ID: &str = "fk-entry-playthrough_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite cannot add a foreign key to an existing table, so it is declared inline.
        manager
            .create_table(
                Table::create()
                    .table(Entry::Table)
                    .if_not_exists()
                    .col(pk_auto(Entry::Id))
                    .col(integer(Entry::PlaythroughId))
                    .col(string_len(Entry::Title, 120))
                    .col(string_len(Entry::Category, 32))
                    .col(text_null(Entry::Description))
                    .col(timestamp(Entry::CreatedAt))
                    .col(timestamp(Entry::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ENTRY_PLAYTHROUGH_ID)
                            .from(Entry::Table, Entry::PlaythroughId)
                            .to(Playthrough::Table, Playthrough::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ENTRY_PLAYTHROUGH_ID)
                    .table(Entry::Table)
                    .col(Entry::PlaythroughId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ENTRY_PLAYTHROUGH_ID)
                    .table(Entry::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Entry::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Entry {
    Table,
    Id,
    PlaythroughId,
    Title,
    Category,
    Description,
    CreatedAt,
    UpdatedAt,
}

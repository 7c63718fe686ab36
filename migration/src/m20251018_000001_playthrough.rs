use sea_orm_migration::{prelude::*, schema::*};

static IDX_PLAYTHROUGH_UPDATED_AT: &str = "idx-playthrough-updated_at";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Playthrough::Table)
                    .if_not_exists()
                    .col(pk_auto(Playthrough::Id))
                    .col(string_len(Playthrough::Title, 120))
                    .col(string_len(Playthrough::Game, 32))
                    .col(date(Playthrough::StartDate))
                    .col(timestamp(Playthrough::CreatedAt))
                    .col(timestamp(Playthrough::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAYTHROUGH_UPDATED_AT)
                    .table(Playthrough::Table)
                    .col(Playthrough::UpdatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLAYTHROUGH_UPDATED_AT)
                    .table(Playthrough::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Playthrough::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Playthrough {
    Table,
    Id,
    Title,
    Game,
    StartDate,
    CreatedAt,
    UpdatedAt,
}

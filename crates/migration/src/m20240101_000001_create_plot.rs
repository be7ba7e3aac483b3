//! Create `plot` table.
//!
//! `plot_number` is the business key; its unique index is the authoritative
//! duplicate guard for concurrent creators.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Plot::Table)
                    .if_not_exists()
                    .col(pk_auto(Plot::Id))
                    .col(string_len(Plot::PlotNumber, 100).not_null())
                    .col(string_len(Plot::Title, 255).not_null())
                    .col(string_len(Plot::Location, 255).not_null())
                    .col(string_len(Plot::Price, 100).not_null())
                    .col(string_len(Plot::Image, 255).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uniq_plot_plot_number")
                    .table(Plot::Table)
                    .col(Plot::PlotNumber)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Plot::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Plot {
    Table,
    Id,
    PlotNumber,
    Title,
    Location,
    Price,
    Image,
}

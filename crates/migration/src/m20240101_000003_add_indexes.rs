use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Booking: lookups by plot number
        manager
            .create_index(
                Index::create()
                    .name("idx_booking_plot_number")
                    .table(Booking::Table)
                    .col(Booking::PlotNumber)
                    .to_owned(),
            )
            .await?;

        // Booking: queries by submission date
        manager
            .create_index(
                Index::create()
                    .name("idx_booking_date")
                    .table(Booking::Table)
                    .col(Booking::BookingDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_booking_plot_number").table(Booking::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_booking_date").table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Booking { Table, PlotNumber, BookingDate }

//! Create `booking` table.
//! `plot_number` is deliberately not a foreign key: bookings may name plots
//! that were never listed or have since been removed.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(string_len(Booking::Name, 100).not_null())
                    .col(string_len(Booking::Email, 254).not_null())
                    .col(string_len(Booking::Phone, 15).not_null())
                    .col(string_len(Booking::Cnic, 15).not_null())
                    .col(string_len(Booking::PlotNumber, 10).not_null())
                    .col(timestamp_with_time_zone(Booking::BookingDate).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Booking::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Booking {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Cnic,
    PlotNumber,
    BookingDate,
}

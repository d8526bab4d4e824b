use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000002_create_accommodations_table::Accommodations;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(pk_auto(Bookings::Id))
                    .col(string(Bookings::GuestName))
                    .col(string_null(Bookings::GuestEmail))
                    .col(string_null(Bookings::GuestPhone))
                    .col(integer(Bookings::AccommodationId))
                    .col(integer_null(Bookings::PackageId))
                    .col(date(Bookings::CheckIn))
                    .col(date(Bookings::CheckOut))
                    .col(integer(Bookings::Adults).default(1))
                    .col(integer(Bookings::Children).default(0))
                    .col(integer(Bookings::Rooms).default(1))
                    .col(integer(Bookings::FoodVeg).default(0))
                    .col(integer(Bookings::FoodNonveg).default(0))
                    .col(integer(Bookings::FoodJain).default(0))
                    .col(double(Bookings::TotalAmount))
                    .col(double(Bookings::AdvanceAmount).default(0.0))
                    .col(string(Bookings::PaymentStatus).default("pending"))
                    .col(string_uniq(Bookings::PaymentTxnId))
                    .col(
                        timestamp_with_time_zone(Bookings::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_accommodation_id")
                            .from(Bookings::Table, Bookings::AccommodationId)
                            .to(Accommodations::Table, Accommodations::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The sweeper filters on (payment_status, created_at) every run.
        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_status_created_at")
                    .table(Bookings::Table)
                    .col(Bookings::PaymentStatus)
                    .col(Bookings::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bookings {
    Table,
    Id,
    GuestName,
    GuestEmail,
    GuestPhone,
    AccommodationId,
    PackageId,
    CheckIn,
    CheckOut,
    Adults,
    Children,
    Rooms,
    FoodVeg,
    FoodNonveg,
    FoodJain,
    TotalAmount,
    AdvanceAmount,
    PaymentStatus,
    PaymentTxnId,
    CreatedAt,
}

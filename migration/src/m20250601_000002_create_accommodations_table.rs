use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accommodations::Table)
                    .if_not_exists()
                    .col(pk_auto(Accommodations::Id))
                    .col(string(Accommodations::Name))
                    .col(text_null(Accommodations::Address))
                    .col(double_null(Accommodations::Latitude))
                    .col(double_null(Accommodations::Longitude))
                    .col(integer_null(Accommodations::OwnerId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_accommodations_owner_id")
                            .from(Accommodations::Table, Accommodations::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Accommodations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Accommodations {
    Table,
    Id,
    Name,
    Address,
    Latitude,
    Longitude,
    OwnerId,
}

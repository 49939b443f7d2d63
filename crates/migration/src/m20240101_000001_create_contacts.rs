//! Create `contacts` table.
//!
//! Column widths mirror the limits the API documents for each field.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contacts::Table)
                    .if_not_exists()
                    .col(pk_auto(Contacts::Id))
                    .col(string_len(Contacts::FirstName, 30).not_null())
                    .col(string_len(Contacts::LastName, 30).not_null())
                    .col(string_len(Contacts::Email, 40).not_null())
                    .col(string_len(Contacts::Phone, 25).not_null())
                    .col(small_integer(Contacts::Status).not_null())
                    .col(timestamp_with_time_zone(Contacts::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Contacts::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Contacts {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    Status,
    UpdatedAt,
}

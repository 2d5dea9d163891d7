//! Create `orders` table: one row per table order.
//!
//! `table_number` is not unique (a table can hold several orders),
//! `status` is free text and nullable, `total_price` is client-supplied
//! and never derived from the line items.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(integer(Orders::Id).primary_key().auto_increment())
                    .col(integer(Orders::TableNumber).not_null())
                    .col(
                        ColumnDef::new(Orders::Status)
                            .string_len(20)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Orders::TotalPrice)
                            .decimal_len(10, 2)
                            .null(),
                    )
                    .col(timestamp_with_time_zone(Orders::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Orders::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Orders::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Orders {
    Table,
    Id,
    TableNumber,
    Status,
    TotalPrice,
    CreatedAt,
    UpdatedAt,
}

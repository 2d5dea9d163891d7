//! Create `food_and_beverage` table: the sellable menu items.
//!
//! `type` is free text ("food" / "beverage" by convention), `price` stays
//! NULL until an update sets it. The legacy split `food` / `beverage`
//! tables are not reproduced; only the merged final shape exists here.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FoodAndBeverage::Table)
                    .if_not_exists()
                    .col(integer(FoodAndBeverage::Id).primary_key().auto_increment())
                    .col(string_len(FoodAndBeverage::Name, 100).not_null())
                    .col(string_len(FoodAndBeverage::Type, 20).not_null())
                    .col(
                        ColumnDef::new(FoodAndBeverage::Price)
                            .decimal_len(10, 2)
                            .null(),
                    )
                    .col(timestamp_with_time_zone(FoodAndBeverage::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(FoodAndBeverage::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(FoodAndBeverage::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum FoodAndBeverage {
    Table,
    Id,
    Name,
    Type,
    Price,
    CreatedAt,
    UpdatedAt,
}

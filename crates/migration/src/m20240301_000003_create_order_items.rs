//! Create `order_items` table with FK to `orders`.
//!
//! Line items are owned by their order (ON DELETE CASCADE). `item_id` is a
//! loose reference into `food_and_beverage`: deliberately no FK constraint,
//! an order may point at an item id that no longer exists.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderItems::Table)
                    .if_not_exists()
                    .col(integer(OrderItems::Id).primary_key().auto_increment())
                    .col(integer(OrderItems::OrderId).not_null())
                    .col(integer(OrderItems::ItemId).not_null())
                    .col(integer(OrderItems::Quantity).not_null())
                    .col(timestamp_with_time_zone(OrderItems::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orderitem_order")
                            .from(OrderItems::Table, OrderItems::OrderId)
                            .to(Orders::Table, Orders::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(OrderItems::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum OrderItems {
    Table,
    Id,
    OrderId,
    ItemId,
    Quantity,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Orders { Table, Id }

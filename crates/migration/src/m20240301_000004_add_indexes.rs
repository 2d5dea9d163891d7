use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Orders: lookup by table number
        manager
            .create_index(
                Index::create()
                    .name("idx_orders_table_number")
                    .table(Orders::Table)
                    .col(Orders::TableNumber)
                    .to_owned(),
            )
            .await?;

        // OrderItems: index on order_id
        manager
            .create_index(
                Index::create()
                    .name("idx_orderitems_order")
                    .table(OrderItems::Table)
                    .col(OrderItems::OrderId)
                    .to_owned(),
            )
            .await?;

        // OrderItems: find-or-increment lookup by (order_id, item_id).
        // Not unique: order creation may legitimately insert duplicate lines.
        manager
            .create_index(
                Index::create()
                    .name("idx_orderitems_order_item")
                    .table(OrderItems::Table)
                    .col(OrderItems::OrderId)
                    .col(OrderItems::ItemId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_orders_table_number").table(Orders::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_orderitems_order").table(OrderItems::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_orderitems_order_item").table(OrderItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Orders { Table, TableNumber }

#[derive(DeriveIden)]
enum OrderItems { Table, OrderId, ItemId }

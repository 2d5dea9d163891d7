use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use serde::Deserialize;

use crate::errors::ServiceError;
use models::{order, order_item};

/// One line of an incoming order: which menu item and how many.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderLine {
    pub item_id: i32,
    pub quantity: i32,
}

/// Create an order together with its lines in a single transaction.
/// A failure on any line rolls the whole order back.
pub async fn create_order(
    db: &DatabaseConnection,
    table_number: i32,
    status: Option<&str>,
    total_price: Option<Decimal>,
    lines: &[OrderLine],
) -> Result<order::Model, ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let now = Utc::now();

    let created = order::ActiveModel {
        table_number: Set(table_number),
        status: Set(status.map(|s| s.to_string())),
        total_price: Set(total_price),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .insert(&txn)
    .await
    .map_err(|e| ServiceError::Db(e.to_string()))?;

    for line in lines {
        order_item::ActiveModel {
            order_id: Set(created.id),
            item_id: Set(line.item_id),
            quantity: Set(line.quantity),
            created_at: Set(now.into()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    }

    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(created)
}

/// List every order with its lines, oldest order first.
pub async fn list_orders(
    db: &DatabaseConnection,
) -> Result<Vec<(order::Model, Vec<order_item::Model>)>, ServiceError> {
    Ok(order::Entity::find()
        .find_with_related(order_item::Entity)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Merge new lines into the earliest order for a table, atomically.
/// A line whose item already sits on the order adds to its quantity;
/// anything else is appended as a new line. Quantities never decrease here.
pub async fn edit_order_by_table(
    db: &DatabaseConnection,
    table_number: i32,
    lines: &[OrderLine],
) -> Result<order::Model, ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;

    // Several orders may share a table; the earliest one wins.
    let target = order::Entity::find()
        .filter(order::Column::TableNumber.eq(table_number))
        .order_by_asc(order::Column::Id)
        .one(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("Order not found for the given table number!"))?;

    let now = Utc::now();
    for line in lines {
        // Bulk creation may have left duplicate lines; merge into the earliest.
        let existing = order_item::Entity::find()
            .filter(order_item::Column::OrderId.eq(target.id))
            .filter(order_item::Column::ItemId.eq(line.item_id))
            .order_by_asc(order_item::Column::Id)
            .one(&txn)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;

        match existing {
            Some(row) => {
                let merged = row.quantity + line.quantity;
                let mut am: order_item::ActiveModel = row.into();
                am.quantity = Set(merged);
                am.update(&txn).await.map_err(|e| ServiceError::Db(e.to_string()))?;
            }
            None => {
                order_item::ActiveModel {
                    order_id: Set(target.id),
                    item_id: Set(line.item_id),
                    quantity: Set(line.quantity),
                    created_at: Set(now.into()),
                    ..Default::default()
                }
                .insert(&txn)
                .await
                .map_err(|e| ServiceError::Db(e.to_string()))?;
            }
        }
    }

    let mut am: order::ActiveModel = target.into();
    am.updated_at = Set(now.into());
    let updated = am.update(&txn).await.map_err(|e| ServiceError::Db(e.to_string()))?;

    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

/// Overwrite the order status, including with NULL. Any string is accepted;
/// there is no transition contract over statuses.
pub async fn update_order_status(db: &DatabaseConnection, id: i32, status: Option<&str>) -> Result<order::Model, ServiceError> {
    let mut am: order::ActiveModel = order::Entity::find_by_id(id)
        .one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("Order not found!"))?
        .into();
    am.status = Set(status.map(|s| s.to_string()));
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

/// Delete an order; its lines go with it through the FK cascade.
pub async fn delete_order(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = order::Entity::delete_by_id(id)
        .exec(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Order not found!"));
    }
    Ok(())
}

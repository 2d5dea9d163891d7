use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::errors::ServiceError;
use models::menu_item;

/// Create a menu item. The price is set later through an update.
pub async fn create_menu_item(db: &DatabaseConnection, name: &str, item_type: &str) -> Result<menu_item::Model, ServiceError> {
    let created = menu_item::create(db, name, item_type).await?;
    Ok(created)
}

/// List every menu item, oldest first.
pub async fn list_menu_items(db: &DatabaseConnection) -> Result<Vec<menu_item::Model>, ServiceError> {
    Ok(menu_item::Entity::find()
        .order_by_asc(menu_item::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Update menu item fields. `None` leaves a field untouched.
pub async fn update_menu_item(db: &DatabaseConnection, id: i32, name: Option<&str>, item_type: Option<&str>, price: Option<Decimal>) -> Result<menu_item::Model, ServiceError> {
    let mut am: menu_item::ActiveModel = menu_item::Entity::find_by_id(id)
        .one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("Item not found!"))?
        .into();
    if let Some(n) = name { am.name = Set(n.to_string()); }
    if let Some(t) = item_type { am.item_type = Set(t.to_string()); }
    if let Some(p) = price { am.price = Set(Some(p)); }
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

/// Delete a menu item by id.
pub async fn delete_menu_item(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = menu_item::Entity::delete_by_id(id)
        .exec(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Item not found!"));
    }
    Ok(())
}

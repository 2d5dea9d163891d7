use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::order_item;

/// Row in `orders`. `table_number` is not unique: a busy table can carry
/// several orders at once. `status` is free text (no state machine) and
/// nullable; `total_price` is whatever the client claimed, never the sum
/// of the line items.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub table_number: i32,
    pub status: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub total_price: Option<Decimal>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    OrderItem,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::OrderItem => Entity::has_many(order_item::Entity).into(),
        }
    }
}

impl Related<order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

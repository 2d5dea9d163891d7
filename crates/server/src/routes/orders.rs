use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::ApiError;
use crate::routes::ServerState;
use service::order_service::{self, OrderLine};

#[derive(Debug, Deserialize)]
pub struct CreateOrderInput {
    pub table_number: i32,
    pub items: Vec<OrderLine>,
    pub total_price: Option<Decimal>,
    /// 缺省时落默认值 "open"；显式 null 则存 NULL
    #[serde(default = "default_order_status")]
    pub status: Option<String>,
}

fn default_order_status() -> Option<String> {
    Some("open".to_owned())
}

#[derive(Debug, Deserialize)]
pub struct EditOrderInput {
    #[serde(default)]
    pub items: Vec<OrderLine>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateOrderStatusInput {
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OrderLinePayload {
    pub item_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Serialize)]
pub struct OrderPayload {
    pub id: i32,
    pub table_number: i32,
    pub status: Option<String>,
    pub items: Vec<OrderLinePayload>,
}

#[derive(Debug, Serialize)]
pub struct OrderList {
    pub orders: Vec<OrderPayload>,
}

/// 创建订单及其全部菜品行（单事务，失败整体回滚）
pub async fn create_order(
    State(state): State<ServerState>,
    Json(input): Json<CreateOrderInput>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    order_service::create_order(
        &state.db,
        input.table_number,
        input.status.as_deref(),
        input.total_price,
        &input.items,
    )
    .await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({"message": "Order created successfully!"})),
    ))
}

/// 列出全部订单及其菜品行
pub async fn list_orders(State(state): State<ServerState>) -> Result<Json<OrderList>, ApiError> {
    let orders = order_service::list_orders(&state.db).await?;
    let orders = orders
        .into_iter()
        .map(|(order, items)| OrderPayload {
            id: order.id,
            table_number: order.table_number,
            status: order.status,
            items: items
                .into_iter()
                .map(|i| OrderLinePayload { item_id: i.item_id, quantity: i.quantity })
                .collect(),
        })
        .collect();
    Ok(Json(OrderList { orders }))
}

/// 按桌号向既有订单合并菜品行；路径参数是桌号
pub async fn edit_order_by_table(
    State(state): State<ServerState>,
    Path(table_number): Path<i32>,
    Json(input): Json<EditOrderInput>,
) -> Result<Json<Value>, ApiError> {
    order_service::edit_order_by_table(&state.db, table_number, &input.items).await?;
    Ok(Json(json!({"message": "Order updated successfully!"})))
}

/// 覆盖订单状态（允许写入 null）
pub async fn update_order_status(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateOrderStatusInput>,
) -> Result<Json<Value>, ApiError> {
    order_service::update_order_status(&state.db, id, input.status.as_deref()).await?;
    Ok(Json(json!({"message": "Order status updated successfully!"})))
}

/// 删除订单（菜品行随外键级联删除）
pub async fn delete_order(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    order_service::delete_order(&state.db, id).await?;
    Ok(Json(json!({"message": "Order deleted successfully!"})))
}

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
use models::menu_item;
use service::menu_service;

#[derive(Debug, Deserialize)]
pub struct CreateMenuItemInput {
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: String,
}

/// 局部更新：缺省（或 null）的字段保持原值
#[derive(Debug, Deserialize)]
pub struct UpdateMenuItemInput {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub price: Option<Decimal>,
}

#[derive(Debug, Serialize)]
pub struct MenuItemPayload {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub price: Option<Decimal>,
}

impl From<menu_item::Model> for MenuItemPayload {
    fn from(m: menu_item::Model) -> Self {
        Self { id: m.id, name: m.name, item_type: m.item_type, price: m.price }
    }
}

#[derive(Debug, Serialize)]
pub struct MenuItemList {
    pub items: Vec<MenuItemPayload>,
}

/// 创建菜单项（价格后续通过更新补充）
pub async fn create_menu_item(
    State(state): State<ServerState>,
    Json(input): Json<CreateMenuItemInput>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let created = menu_service::create_menu_item(&state.db, &input.name, &input.item_type).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({"message": "Item created successfully!", "id": created.id})),
    ))
}

/// 列出全部菜单项
pub async fn list_menu_items(
    State(state): State<ServerState>,
) -> Result<Json<MenuItemList>, ApiError> {
    let items = menu_service::list_menu_items(&state.db).await?;
    Ok(Json(MenuItemList {
        items: items.into_iter().map(Into::into).collect(),
    }))
}

/// 更新菜单项
pub async fn update_menu_item(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateMenuItemInput>,
) -> Result<Json<Value>, ApiError> {
    menu_service::update_menu_item(
        &state.db,
        id,
        input.name.as_deref(),
        input.item_type.as_deref(),
        input.price,
    )
    .await?;
    Ok(Json(json!({"message": "Item updated successfully!"})))
}

/// 删除菜单项
pub async fn delete_menu_item(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    menu_service::delete_menu_item(&state.db, id).await?;
    Ok(Json(json!({"message": "Item deleted successfully!"})))
}

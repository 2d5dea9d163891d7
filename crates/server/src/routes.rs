use axum::{
    routing::{get, post, put},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

pub mod menu_items;
pub mod orders;

/// Shared handler state: the sea-orm connection pool.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health probe plus the versioned API
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    // Public routes (health)
    let public = Router::new().route("/health", get(health));

    // Versioned API routes
    let api = Router::new()
        .route(
            "/api/v1/menu-items",
            post(menu_items::create_menu_item).get(menu_items::list_menu_items),
        )
        .route(
            "/api/v1/menu-items/:id",
            put(menu_items::update_menu_item).delete(menu_items::delete_menu_item),
        )
        .route(
            "/api/v1/orders",
            post(orders::create_order).get(orders::list_orders),
        )
        // PUT 的路径参数是桌号，DELETE 的是订单 id；两者共用同一路径形态
        .route(
            "/api/v1/orders/:id",
            put(orders::edit_order_by_table).delete(orders::delete_order),
        )
        .route("/api/v1/orders/:id/status", put(orders::update_order_status));

    // Compose
    public
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 请求到达时打点
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                ),
        )
}

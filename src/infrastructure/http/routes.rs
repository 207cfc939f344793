//! HTTP Routes
//!
//! API Endpoints:
//! - /          GET     列出条目（?since=&limit=）
//! - /          POST    新增条目
//! - /:id       PUT     替换条目
//! - /:id       DELETE  删除条目
//! - /ping      GET     健康检查

use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .merge(todo_routes())
}

/// Todo 路由
fn todo_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::find_todos).post(handlers::add_one))
        .route("/:id", put(handlers::update_one).delete(handlers::destroy_one))
}

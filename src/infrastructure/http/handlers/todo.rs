//! Todo HTTP Handlers
//!
//! 提取器以 `Result` 形式接收，拒绝统一转为 [`ApiError`]

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{AddItem, DeleteItem, ListItems, UpdateItem};
use crate::domain::todo::ItemId;
use crate::infrastructure::http::dto::{parse_item_body, ItemResponse, ListQuery};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 列出条目
pub async fn find_todos(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let Query(query) = query?;
    let query = ListItems {
        since: query.since.map(ItemId::new),
        limit: query.limit,
    };

    let items = state.list_items_handler.handle(query);

    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// 新增条目
pub async fn add_one(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    let item = parse_item_body(&body?)?;

    let created = state.add_item_handler.handle(AddItem { item })?;

    Ok((StatusCode::CREATED, Json(ItemResponse::from(created))))
}

/// 替换条目
pub async fn update_one(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ItemResponse>, ApiError> {
    let Path(id) = id?;
    let item = parse_item_body(&body?)?;

    let updated = state.update_item_handler.handle(UpdateItem {
        id: ItemId::new(id),
        item,
    })?;

    Ok(Json(ItemResponse::from(updated)))
}

/// 删除条目
pub async fn destroy_one(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;

    state
        .delete_item_handler
        .handle(DeleteItem { id: ItemId::new(id) })?;

    Ok(StatusCode::NO_CONTENT)
}

//! Data Transfer Objects

use axum::body::Bytes;
use serde::{Deserialize, Serialize};

use crate::domain::todo::{Description, TodoItem};
use crate::infrastructure::http::error::ApiError;

// ============================================================================
// Item DTOs
// ============================================================================

/// 新增/替换条目的请求体
///
/// 请求体中的 `id` 字段即便存在也会被忽略，标识只由存储层决定
#[derive(Debug, Deserialize)]
pub struct ItemPayload {
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

impl ItemPayload {
    /// 校验并转换为领域对象
    pub fn into_item(self) -> Result<TodoItem, ApiError> {
        let description = Description::new(self.description)
            .map_err(|e| ApiError::Unprocessable(e.to_string()))?;
        Ok(TodoItem::new(description).with_completed(self.completed))
    }
}

/// 解析条目请求体
///
/// 空请求体或 `null` 视为未携带条目，返回 `Ok(None)`，由存储层给出 InvalidInput。
/// 不检查 Content-Type，兼容 `application/io.goswagger.examples.todo-list.v1+json` 等媒体类型。
pub fn parse_item_body(body: &Bytes) -> Result<Option<TodoItem>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    let payload: Option<ItemPayload> = serde_json::from_slice(body)
        .map_err(|e| ApiError::Unprocessable(format!("Invalid item payload: {}", e)))?;

    payload.map(ItemPayload::into_item).transpose()
}

/// 条目响应
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemResponse {
    pub id: i64,
    pub description: String,
    pub completed: bool,
}

impl From<TodoItem> for ItemResponse {
    fn from(item: TodoItem) -> Self {
        Self {
            id: item.id().as_i64(),
            completed: item.is_completed(),
            description: item.description().as_str().to_string(),
        }
    }
}

/// 列表查询参数
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub since: Option<i64>,
    pub limit: Option<u32>,
}

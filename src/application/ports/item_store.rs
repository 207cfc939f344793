//! Item Store Port - 待办条目存储
//!
//! 定义条目存储的抽象接口，具体实现在 infrastructure/memory 层

use thiserror::Error;

use crate::domain::todo::{ItemId, TodoItem};

/// Item Store 错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemStoreError {
    #[error("{0}")]
    InvalidInput(&'static str),

    #[error("not found: item {0}")]
    NotFound(ItemId),
}

/// Item Store Port
///
/// 所有条目与标识计数器都由实现方独占，调用方只能通过以下四个操作访问。
/// 每个写操作要么完整生效，要么不改变任何状态。
pub trait ItemStorePort: Send + Sync {
    /// 新增条目，分配一个从未使用过的标识并返回存储后的条目
    ///
    /// `item` 为 `None` 时返回 [`ItemStoreError::InvalidInput`]
    fn add(&self, item: Option<TodoItem>) -> Result<TodoItem, ItemStoreError>;

    /// 整体替换 `id` 处的条目，条目自带的标识会被忽略
    fn update(&self, id: ItemId, item: Option<TodoItem>) -> Result<TodoItem, ItemStoreError>;

    /// 删除条目，被删除的标识不会再被分配
    fn delete(&self, id: ItemId) -> Result<(), ItemStoreError>;

    /// 列出标识大于 `since` 的条目（`since` 为 0 时不设下界），最多 `limit` 条
    ///
    /// 返回顺序不保证
    fn list(&self, since: ItemId, limit: usize) -> Vec<TodoItem>;
}

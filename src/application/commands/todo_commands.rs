//! Todo Commands

use crate::domain::todo::{ItemId, TodoItem};

/// 新增条目命令
///
/// `item` 为 `None` 表示请求未携带条目
#[derive(Debug, Clone)]
pub struct AddItem {
    pub item: Option<TodoItem>,
}

/// 替换条目命令
#[derive(Debug, Clone)]
pub struct UpdateItem {
    pub id: ItemId,
    pub item: Option<TodoItem>,
}

/// 删除条目命令
#[derive(Debug, Clone)]
pub struct DeleteItem {
    pub id: ItemId,
}

//! Todo Context - Aggregate Root

use super::{Description, ItemId};

/// TodoItem 聚合根
///
/// 不变量:
/// - id 只由存储层分配，创建时为 [`ItemId::UNASSIGNED`]
/// - 描述非空（由 [`Description`] 保证）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    id: ItemId,
    description: Description,
    completed: bool,
}

impl TodoItem {
    /// 创建未分配标识的新条目
    pub fn new(description: Description) -> Self {
        Self {
            id: ItemId::UNASSIGNED,
            description,
            completed: false,
        }
    }

    /// 设置完成状态
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// 写入标识，覆盖原有值
    pub fn assign_id(&mut self, id: ItemId) {
        self.id = id;
    }

    // Getters
    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

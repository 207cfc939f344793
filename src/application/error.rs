//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::ItemStoreError;
use crate::domain::todo::ItemId;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 缺少必需的输入
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: ItemId,
    },

    /// 内部错误（存储层不会产生，保留给上层包装意外失败）
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: ItemId) -> Self {
        Self::NotFound { resource_type, id }
    }
}

impl From<ItemStoreError> for ApplicationError {
    fn from(err: ItemStoreError) -> Self {
        match err {
            ItemStoreError::InvalidInput(msg) => Self::InvalidInput(msg.to_string()),
            ItemStoreError::NotFound(id) => Self::not_found("Item", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_errors_convert() {
        let err = ApplicationError::from(ItemStoreError::NotFound(ItemId::new(4)));
        assert_eq!(err.to_string(), "Item not found: 4");

        let err = ApplicationError::from(ItemStoreError::InvalidInput("item must be present"));
        assert_eq!(err.to_string(), "Invalid input: item must be present");
    }
}

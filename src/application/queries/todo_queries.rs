//! Todo Queries

use crate::domain::todo::ItemId;

/// 分页列出条目查询
///
/// 未指定的参数由 [`ListItemsHandler`](super::handlers::ListItemsHandler) 补全默认值
#[derive(Debug, Clone, Default)]
pub struct ListItems {
    pub since: Option<ItemId>,
    pub limit: Option<u32>,
}

/// 分页上限
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    /// 未指定 limit 时使用的条数
    pub default_limit: u32,
    /// 单次最多返回的条数
    pub max_limit: u32,
}

impl PageLimits {
    /// 解析请求的 limit：缺省取默认值，超出上限时截断
    pub fn resolve(&self, requested: Option<u32>) -> u32 {
        requested
            .unwrap_or(self.default_limit)
            .min(self.max_limit)
    }
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_limit: 20,
            max_limit: 1000,
        }
    }
}

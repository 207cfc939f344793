//! Application State
//!
//! 持有条目存储及所有 Command/Query Handlers

use std::sync::Arc;

use crate::application::{
    // Command handlers
    AddItemHandler, DeleteItemHandler, UpdateItemHandler,
    // Query handlers
    ListItemsHandler, PageLimits,
    // Ports
    ItemStorePort,
};

/// 应用状态
///
/// 条目存储在进程启动时创建一次，由此注入到所有 handler
pub struct AppState {
    // ========== Command Handlers ==========
    pub add_item_handler: AddItemHandler,
    pub update_item_handler: UpdateItemHandler,
    pub delete_item_handler: DeleteItemHandler,

    // ========== Query Handlers ==========
    pub list_items_handler: ListItemsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(item_store: Arc<dyn ItemStorePort>, limits: PageLimits) -> Self {
        Self {
            add_item_handler: AddItemHandler::new(item_store.clone()),
            update_item_handler: UpdateItemHandler::new(item_store.clone()),
            delete_item_handler: DeleteItemHandler::new(item_store.clone()),

            list_items_handler: ListItemsHandler::new(item_store, limits),
        }
    }
}

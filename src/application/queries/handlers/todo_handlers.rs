//! Todo Query Handlers

use std::sync::Arc;

use crate::application::ports::ItemStorePort;
use crate::application::queries::{ListItems, PageLimits};
use crate::domain::todo::{ItemId, TodoItem};

/// ListItems Handler
pub struct ListItemsHandler {
    item_store: Arc<dyn ItemStorePort>,
    limits: PageLimits,
}

impl ListItemsHandler {
    pub fn new(item_store: Arc<dyn ItemStorePort>, limits: PageLimits) -> Self {
        Self { item_store, limits }
    }

    pub fn handle(&self, query: ListItems) -> Vec<TodoItem> {
        let since = query.since.unwrap_or(ItemId::UNASSIGNED);
        let limit = self.limits.resolve(query.limit);

        let items = self.item_store.list(since, limit as usize);

        tracing::debug!(
            since = %since,
            limit = limit,
            count = items.len(),
            "Items listed"
        );

        items
    }
}

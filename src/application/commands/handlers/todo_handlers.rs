//! Todo Command Handlers

use std::sync::Arc;

use crate::application::commands::{AddItem, DeleteItem, UpdateItem};
use crate::application::error::ApplicationError;
use crate::application::ports::ItemStorePort;
use crate::domain::todo::TodoItem;

// ============================================================================
// AddItem
// ============================================================================

/// AddItem Handler
pub struct AddItemHandler {
    item_store: Arc<dyn ItemStorePort>,
}

impl AddItemHandler {
    pub fn new(item_store: Arc<dyn ItemStorePort>) -> Self {
        Self { item_store }
    }

    pub fn handle(&self, command: AddItem) -> Result<TodoItem, ApplicationError> {
        let item = self.item_store.add(command.item)?;

        tracing::info!(
            item_id = %item.id(),
            completed = item.is_completed(),
            "Item added"
        );

        Ok(item)
    }
}

// ============================================================================
// UpdateItem
// ============================================================================

/// UpdateItem Handler
pub struct UpdateItemHandler {
    item_store: Arc<dyn ItemStorePort>,
}

impl UpdateItemHandler {
    pub fn new(item_store: Arc<dyn ItemStorePort>) -> Self {
        Self { item_store }
    }

    pub fn handle(&self, command: UpdateItem) -> Result<TodoItem, ApplicationError> {
        let item = self.item_store.update(command.id, command.item)?;

        tracing::info!(
            item_id = %item.id(),
            completed = item.is_completed(),
            "Item updated"
        );

        Ok(item)
    }
}

// ============================================================================
// DeleteItem
// ============================================================================

/// DeleteItem Handler
pub struct DeleteItemHandler {
    item_store: Arc<dyn ItemStorePort>,
}

impl DeleteItemHandler {
    pub fn new(item_store: Arc<dyn ItemStorePort>) -> Self {
        Self { item_store }
    }

    pub fn handle(&self, command: DeleteItem) -> Result<(), ApplicationError> {
        self.item_store.delete(command.id)?;

        tracing::info!(item_id = %command.id, "Item deleted");

        Ok(())
    }
}

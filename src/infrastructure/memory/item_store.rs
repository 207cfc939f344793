//! In-Memory Item Store Implementation

use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::application::ports::{ItemStorePort, ItemStoreError};
use crate::domain::todo::{ItemId, TodoItem};

/// 内存条目存储
///
/// 写操作（add/update/delete）全程持有 `write_lock`，标识分配与插入在同一临界区内完成。
/// list 不获取写锁，只依赖 DashMap 的分片读锁。
pub struct InMemoryItemStore {
    /// item_id -> TodoItem
    items: DashMap<ItemId, TodoItem>,
    /// 最后一次分配的标识
    last_id: AtomicI64,
    /// 写操作互斥锁
    write_lock: Mutex<()>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
            last_id: AtomicI64::new(0),
            write_lock: Mutex::new(()),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    fn next_id(&self) -> ItemId {
        ItemId::new(self.last_id.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

impl Default for InMemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStorePort for InMemoryItemStore {
    fn add(&self, item: Option<TodoItem>) -> Result<TodoItem, ItemStoreError> {
        let mut item = item.ok_or(ItemStoreError::InvalidInput("item must be present"))?;

        // 锁内只保护 ()，中毒不影响一致性
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let id = self.next_id();
        item.assign_id(id);
        self.items.insert(id, item.clone());

        Ok(item)
    }

    fn update(&self, id: ItemId, item: Option<TodoItem>) -> Result<TodoItem, ItemStoreError> {
        let mut item = item.ok_or(ItemStoreError::InvalidInput("item must be present"))?;

        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        if !self.items.contains_key(&id) {
            return Err(ItemStoreError::NotFound(id));
        }

        item.assign_id(id);
        self.items.insert(id, item.clone());

        Ok(item)
    }

    fn delete(&self, id: ItemId) -> Result<(), ItemStoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        self.items
            .remove(&id)
            .map(|_| ())
            .ok_or(ItemStoreError::NotFound(id))
    }

    fn list(&self, since: ItemId, limit: usize) -> Vec<TodoItem> {
        self.items
            .iter()
            .filter(|entry| !since.is_assigned() || *entry.key() > since)
            .take(limit)
            .map(|entry| entry.value().clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::todo::Description;
    use std::collections::HashSet;
    use std::thread;

    fn todo(description: &str) -> TodoItem {
        TodoItem::new(Description::new(description).unwrap())
    }

    fn ids(items: &[TodoItem]) -> HashSet<i64> {
        items.iter().map(|i| i.id().as_i64()).collect()
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let store = InMemoryItemStore::new();

        let first = store.add(Some(todo("buy milk"))).unwrap();
        let second = store.add(Some(todo("walk dog"))).unwrap();

        assert_eq!(first.id(), ItemId::new(1));
        assert_eq!(second.id(), ItemId::new(2));
    }

    #[test]
    fn test_add_overwrites_client_id() {
        let store = InMemoryItemStore::new();
        let mut item = todo("buy milk");
        item.assign_id(ItemId::new(99));

        let stored = store.add(Some(item)).unwrap();

        assert_eq!(stored.id(), ItemId::new(1));
        assert!(store.list(ItemId::new(98), 10).is_empty());
    }

    #[test]
    fn test_add_none_is_invalid_input() {
        let store = InMemoryItemStore::new();
        store.add(Some(todo("buy milk"))).unwrap();

        let result = store.add(None);

        assert!(matches!(result, Err(ItemStoreError::InvalidInput(_))));
        assert_eq!(store.list(ItemId::UNASSIGNED, 10).len(), 1);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let store = InMemoryItemStore::new();
        let first = store.add(Some(todo("a"))).unwrap();
        let second = store.add(Some(todo("b"))).unwrap();

        store.delete(second.id()).unwrap();
        store.delete(first.id()).unwrap();
        let third = store.add(Some(todo("c"))).unwrap();

        assert_eq!(third.id(), ItemId::new(3));
    }

    #[test]
    fn test_update_replaces_and_forces_id() {
        let store = InMemoryItemStore::new();
        let stored = store.add(Some(todo("buy milk"))).unwrap();
        let mut replacement = todo("buy milk and eggs").with_completed(true);
        replacement.assign_id(ItemId::new(42));

        let updated = store.update(stored.id(), Some(replacement)).unwrap();

        assert_eq!(updated.id(), stored.id());
        let items = store.list(ItemId::UNASSIGNED, 10);
        assert_eq!(items, vec![updated]);
        assert_eq!(items[0].description().as_str(), "buy milk and eggs");
        assert!(items[0].is_completed());
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let store = InMemoryItemStore::new();
        let stored = store.add(Some(todo("buy milk"))).unwrap();

        let result = store.update(ItemId::new(5), Some(todo("ghost")));

        assert_eq!(result, Err(ItemStoreError::NotFound(ItemId::new(5))));
        assert_eq!(store.list(ItemId::UNASSIGNED, 10), vec![stored]);
    }

    #[test]
    fn test_update_none_is_invalid_input() {
        let store = InMemoryItemStore::new();
        let stored = store.add(Some(todo("buy milk"))).unwrap();

        let result = store.update(stored.id(), None);

        assert!(matches!(result, Err(ItemStoreError::InvalidInput(_))));
        assert_eq!(store.list(ItemId::UNASSIGNED, 10), vec![stored]);
    }

    #[test]
    fn test_delete_twice_is_not_found() {
        let store = InMemoryItemStore::new();
        let stored = store.add(Some(todo("walk dog"))).unwrap();

        assert!(store.delete(stored.id()).is_ok());
        assert_eq!(
            store.delete(stored.id()),
            Err(ItemStoreError::NotFound(stored.id()))
        );
        assert!(store.list(ItemId::UNASSIGNED, 10).is_empty());
    }

    #[test]
    fn test_delete_never_issued_is_not_found() {
        let store = InMemoryItemStore::new();
        let stored = store.add(Some(todo("walk dog"))).unwrap();

        assert_eq!(
            store.delete(ItemId::new(2)),
            Err(ItemStoreError::NotFound(ItemId::new(2)))
        );
        assert_eq!(store.list(ItemId::UNASSIGNED, 10), vec![stored]);
    }

    #[test]
    fn test_list_since_and_limit() {
        let store = InMemoryItemStore::new();
        for i in 1..=5 {
            store.add(Some(todo(&format!("item {}", i)))).unwrap();
        }

        let page = store.list(ItemId::new(2), 2);

        assert_eq!(page.len(), 2);
        assert!(page.iter().all(|item| item.id().as_i64() > 2));
    }

    #[test]
    fn test_list_since_zero_returns_all() {
        let store = InMemoryItemStore::new();
        for i in 1..=5 {
            store.add(Some(todo(&format!("item {}", i)))).unwrap();
        }

        let all = store.list(ItemId::UNASSIGNED, 100);

        assert_eq!(ids(&all), (1..=5).collect::<HashSet<i64>>());
    }

    #[test]
    fn test_list_limit_zero_is_empty() {
        let store = InMemoryItemStore::new();
        store.add(Some(todo("buy milk"))).unwrap();

        assert!(store.list(ItemId::UNASSIGNED, 0).is_empty());
    }

    #[test]
    fn test_list_empty_store() {
        let store = InMemoryItemStore::new();
        assert!(store.list(ItemId::UNASSIGNED, 10).is_empty());
    }

    #[test]
    fn test_concurrent_adds_get_unique_ids() {
        let store = InMemoryItemStore::new().arc();

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = store.clone();
                thread::spawn(move || {
                    (0..250)
                        .map(|i| {
                            store
                                .add(Some(todo(&format!("thread {} item {}", t, i))))
                                .unwrap()
                                .id()
                                .as_i64()
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate id {}", id);
            }
        }

        assert_eq!(seen.len(), 2000);
        assert_eq!(seen, (1..=2000).collect::<HashSet<i64>>());
        assert_eq!(store.list(ItemId::UNASSIGNED, 5000).len(), 2000);
    }

    #[test]
    fn test_concurrent_list_during_mutation() {
        let store = InMemoryItemStore::new().arc();
        for i in 0..100 {
            store.add(Some(todo(&format!("seed {}", i)))).unwrap();
        }

        let writer = {
            let store = store.clone();
            thread::spawn(move || {
                for i in 1..=100 {
                    let id = ItemId::new(i);
                    store
                        .update(id, Some(todo("updated").with_completed(true)))
                        .unwrap();
                    if i % 2 == 0 {
                        store.delete(id).unwrap();
                    }
                    store.add(Some(todo("fresh"))).unwrap();
                }
            })
        };

        let reader = {
            let store = store.clone();
            thread::spawn(move || {
                for _ in 0..200 {
                    for item in store.list(ItemId::UNASSIGNED, 1000) {
                        assert!(item.id().is_assigned());
                        if item.is_completed() {
                            assert_eq!(item.description().as_str(), "updated");
                        }
                    }
                }
            })
        };

        writer.join().unwrap();
        reader.join().unwrap();

        // 100 条种子 - 50 条删除 + 100 条新增
        assert_eq!(store.list(ItemId::UNASSIGNED, 1000).len(), 150);
    }
}

//! Memory Layer - In-Memory State Management
//!
//! 实现 ItemStorePort，条目只保存在进程内存中，进程退出即丢弃

mod item_store;

pub use item_store::InMemoryItemStore;

//! todo-list - 待办事项 CRUD 服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Todo Context: 待办条目及其值对象
//!
//! 应用层 (application/):
//! - Ports: ItemStorePort
//! - Commands: AddItem / UpdateItem / DeleteItem
//! - Queries: ListItems
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Memory: InMemoryItemStore 进程内条目存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};

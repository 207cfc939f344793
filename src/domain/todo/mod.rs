//! Todo Context - 待办事项限界上下文
//!
//! 职责:
//! - 待办条目（TodoItem）的结构与不变量
//! - 条目标识与描述的值对象

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::TodoItem;
pub use errors::TodoError;
pub use value_objects::{Description, ItemId};

//! HTTP Layer - RESTful API
//!
//! 只负责请求绑定、请求体校验与响应转换，业务语义全部在条目存储中

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;

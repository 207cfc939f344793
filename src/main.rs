//! todo-list - 待办事项 CRUD 服务
//!
//! - Domain: todo/ (TodoItem, ItemId, Description)
//! - Application: commands, queries, ports
//! - Infrastructure: http, memory

use tracing_subscriber::EnvFilter;

use todo_list::application::PageLimits;
use todo_list::config::{load_config, print_config, AppConfig};
use todo_list::infrastructure::http::{AppState, HttpServer, ServerConfig};
use todo_list::infrastructure::memory::InMemoryItemStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("todo-list {}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 条目存储在此创建一次，注入到所有 handler
    let item_store = InMemoryItemStore::new().arc();
    let limits = PageLimits {
        default_limit: config.pagination.default_limit,
        max_limit: config.pagination.max_limit,
    };
    let state = AppState::new(item_store, limits);

    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_max_body_bytes(config.server.max_body_bytes);
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                return;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// 初始化日志，`RUST_LOG` 优先于配置中的级别
fn init_tracing(config: &AppConfig) {
    let log_filter = config.log.filter_directives();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

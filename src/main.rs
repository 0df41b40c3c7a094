//! Chapterbook - 章节目录 Web 服务

use std::sync::Arc;

use chapterbook::config::{load_config, print_config, LogConfig};
use chapterbook::infrastructure::adapters::{FsChapterIndex, FsFileReader};
use chapterbook::infrastructure::http::{AppState, HttpServer, ServerConfig};

fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},chapterbook={},tower_http=debug", log.level, log.level);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Chapterbook v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    let chapter_index = Arc::new(FsChapterIndex::from_config(&config.chapters));

    // 目录缺失不阻止启动，请求时返回 500
    if !chapter_index.base_dir_exists().await {
        tracing::warn!(
            "Chapters directory does not exist: {}",
            config.chapters.base_dir.display()
        );
    }
    let file_reader = Arc::new(FsFileReader::new());

    let state = AppState::new(chapter_index, file_reader);
    let server = HttpServer::new(ServerConfig::from(&config.server), state);

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for ctrl-c: {}", e);
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

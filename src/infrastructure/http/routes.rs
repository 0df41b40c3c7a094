//! HTTP Routes
//!
//! Pages:
//! - /                       GET  章节首页
//! - /chapter/:name          GET  章节页
//!
//! API Endpoints:
//! - /api/ping               GET  健康检查
//! - /api/chapters           GET  列出所有章节
//! - /api/chapters/:name     GET  获取章节原始内容

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::index_page))
        .route("/chapter/:name", get(handlers::chapter_page))
        .nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/chapters", get(handlers::list_chapters))
        .route("/chapters/:name", get(handlers::get_chapter))
}

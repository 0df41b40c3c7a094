//! HTML Page Handlers
//!
//! 章节首页与章节页

use axum::{
    extract::{Path, State},
    response::Html,
};
use std::sync::Arc;

use crate::application::{GetChapter, ListChapters};
use crate::infrastructure::http::dto::ChapterLink;
use crate::infrastructure::http::error::PageError;
use crate::infrastructure::http::state::AppState;
use crate::infrastructure::http::views;

/// 章节首页
pub async fn index_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let chapters = state.list_chapters_handler.handle(ListChapters).await?;

    let links: Vec<ChapterLink> = chapters.into_iter().map(ChapterLink::from).collect();

    Ok(Html(views::render_index_page(&links)))
}

/// 章节页（原始文本）
pub async fn chapter_page(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Html<String>, PageError> {
    let page = state
        .get_chapter_handler
        .handle(GetChapter { name })
        .await?;

    Ok(Html(views::render_chapter_page(&page)))
}

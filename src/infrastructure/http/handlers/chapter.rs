//! Chapter API Handlers

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::application::{GetChapter, ListChapterFiles};
use crate::infrastructure::http::dto::{ApiResponse, ChapterContentResponse, ChapterItemResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 列出所有章节
pub async fn list_chapters(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<ChapterItemResponse>>>, ApiError> {
    let chapters = state
        .list_chapter_files_handler
        .handle(ListChapterFiles)
        .await?;

    let responses: Vec<ChapterItemResponse> = chapters
        .into_iter()
        .map(ChapterItemResponse::from)
        .collect();

    Ok(Json(ApiResponse::success(responses)))
}

/// 获取章节原始内容
pub async fn get_chapter(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<ChapterContentResponse>>, ApiError> {
    let page = state
        .get_chapter_handler
        .handle(GetChapter { name })
        .await?;

    Ok(Json(ApiResponse::success(ChapterContentResponse::from(page))))
}

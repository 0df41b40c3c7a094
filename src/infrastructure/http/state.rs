//! Application State
//!
//! 包含所有 Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    ChapterIndexPort, FileReaderPort, GetChapterHandler, ListChapterFilesHandler,
    ListChaptersHandler,
};

/// 应用状态
///
/// 不含可变状态，每个请求都重新扫描章节目录
pub struct AppState {
    pub list_chapters_handler: ListChaptersHandler,
    pub list_chapter_files_handler: ListChapterFilesHandler,
    pub get_chapter_handler: GetChapterHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        chapter_index: Arc<dyn ChapterIndexPort>,
        file_reader: Arc<dyn FileReaderPort>,
    ) -> Self {
        Self {
            list_chapters_handler: ListChaptersHandler::new(chapter_index.clone()),
            list_chapter_files_handler: ListChapterFilesHandler::new(chapter_index.clone()),
            get_chapter_handler: GetChapterHandler::new(chapter_index, file_reader),
        }
    }
}

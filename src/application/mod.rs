//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（ChapterIndex、FileReader）
//! - queries: 查询及处理器
//! - error: 应用层错误定义

pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use error::ApplicationError;

pub use ports::{ChapterIndexPort, FileReaderPort};

pub use queries::{
    handlers::{
        ChapterPage, ChapterSummary, GetChapterHandler, ListChapterFilesHandler,
        ListChaptersHandler,
    },
    GetChapter, ListChapterFiles, ListChapters,
};

//! 应用层错误定义
//!
//! 统一的查询错误类型

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::chapter::ChapterError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 章节不存在
    #[error("Chapter not found: {0}")]
    ChapterNotFound(String),

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 章节目录不可访问
    #[error("Chapter directory is not accessible: {}", .0.display())]
    DirectoryAccess(PathBuf),

    /// 章节文件读取失败
    #[error("Failed to read chapter file: {}", .0.display())]
    FileRead(PathBuf),
}

impl ApplicationError {
    /// 创建 ChapterNotFound 错误
    pub fn chapter_not_found(name: impl Into<String>) -> Self {
        Self::ChapterNotFound(name.into())
    }

    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}

impl From<ChapterError> for ApplicationError {
    fn from(err: ChapterError) -> Self {
        tracing::debug!(error = ?err, "Chapter storage error");
        match err {
            ChapterError::DirectoryAccess { path, .. } => Self::DirectoryAccess(path),
            ChapterError::FileRead { path, .. } => Self::FileRead(path),
        }
    }
}

//! Filesystem File Reader
//!
//! 实现 FileReaderPort trait

use async_trait::async_trait;
use std::path::Path;
use tokio::fs;

use crate::application::ports::FileReaderPort;
use crate::domain::chapter::ChapterError;

/// 直接读取文件原始文本
#[derive(Debug, Default, Clone, Copy)]
pub struct FsFileReader;

impl FsFileReader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileReaderPort for FsFileReader {
    async fn read_to_string(&self, path: &Path) -> Result<String, ChapterError> {
        let contents = fs::read_to_string(path)
            .await
            .map_err(|e| ChapterError::file_read(path, e))?;

        tracing::debug!(
            "Read chapter file: path={}, size={} bytes",
            path.display(),
            contents.len()
        );

        Ok(contents)
    }
}

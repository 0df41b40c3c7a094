//! File Reader Port - 出站端口

use async_trait::async_trait;
use std::path::Path;

use crate::domain::chapter::ChapterError;

/// 读取章节原始内容，不做 markdown 渲染
#[async_trait]
pub trait FileReaderPort: Send + Sync {
    async fn read_to_string(&self, path: &Path) -> Result<String, ChapterError>;
}

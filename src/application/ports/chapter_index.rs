//! Chapter Index Port - 出站端口
//!
//! 定义章节目录扫描与章节名解析的抽象接口

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::chapter::{ChapterError, ChapterFile};

/// Chapter Index Port - 出站端口
///
/// 每次调用都重新扫描目录，不持有任何可变状态，可被并发调用
#[async_trait]
pub trait ChapterIndexPort: Send + Sync {
    /// 按文件名排序后的全部章节
    async fn chapters(&self) -> Result<Vec<ChapterFile>, ChapterError>;

    /// 按文件名排序的章节名列表
    async fn list_chapters(&self) -> Result<Vec<String>, ChapterError> {
        Ok(self
            .chapters()
            .await?
            .into_iter()
            .map(|chapter| chapter.name)
            .collect())
    }

    /// 根据章节名查找文件路径
    ///
    /// 按目录遍历顺序返回第一个匹配项，找不到时返回 `Ok(None)`
    async fn resolve_chapter(&self, name: &str) -> Result<Option<PathBuf>, ChapterError>;
}

//! Filesystem Chapter Index - 基于目录扫描的章节索引
//!
//! 实现 ChapterIndexPort trait

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::ChapterIndexPort;
use crate::config::ChaptersConfig;
use crate::domain::chapter::{parse_chapter_file_name, ChapterError, ChapterFile};

/// 文件系统章节索引
///
/// 不缓存目录内容，每次调用都重新扫描
pub struct FsChapterIndex {
    /// 章节目录
    base_dir: PathBuf,
}

impl FsChapterIndex {
    /// 创建章节索引（不检查目录是否存在，错误在扫描时返回）
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// 从配置创建
    pub fn from_config(config: &ChaptersConfig) -> Self {
        Self::new(&config.base_dir)
    }

    /// 获取章节目录
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// 章节目录是否存在（启动检查用）
    pub async fn base_dir_exists(&self) -> bool {
        fs::metadata(&self.base_dir)
            .await
            .is_ok_and(|m| m.is_dir())
    }

    /// 按目录遍历顺序读取所有非目录条目的文件名
    ///
    /// 符号链接按目标判断，指向目录的链接同样跳过。
    /// 非 UTF-8 文件名不可能匹配章节格式，直接跳过
    async fn entry_names(&self) -> Result<Vec<String>, ChapterError> {
        let io_err = |e| ChapterError::directory_access(&self.base_dir, e);

        let mut entries = fs::read_dir(&self.base_dir).await.map_err(io_err)?;
        let mut names = Vec::new();

        while let Some(entry) = entries.next_entry().await.map_err(io_err)? {
            if fs::metadata(entry.path()).await.is_ok_and(|m| m.is_dir()) {
                continue;
            }
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }

        Ok(names)
    }
}

#[async_trait]
impl ChapterIndexPort for FsChapterIndex {
    async fn chapters(&self) -> Result<Vec<ChapterFile>, ChapterError> {
        let mut names = self.entry_names().await?;

        // 先按完整文件名排序再过滤，序号前缀等宽时即为按序号排序
        names.sort();

        let chapters: Vec<ChapterFile> = names
            .iter()
            .filter_map(|name| ChapterFile::from_file_name(&self.base_dir, name))
            .collect();

        tracing::debug!(
            "Scanned chapters: dir={}, entries={}, chapters={}",
            self.base_dir.display(),
            names.len(),
            chapters.len()
        );

        Ok(chapters)
    }

    async fn resolve_chapter(&self, name: &str) -> Result<Option<PathBuf>, ChapterError> {
        let names = self.entry_names().await?;

        let path = names
            .iter()
            .find(|file_name| {
                parse_chapter_file_name(file_name).is_some_and(|(_, chapter)| chapter == name)
            })
            .map(|file_name| self.base_dir.join(file_name));

        tracing::debug!(
            "Resolved chapter: name={}, path={:?}",
            name,
            path
        );

        Ok(path)
    }
}

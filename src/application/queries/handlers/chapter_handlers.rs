//! Chapter Query Handlers

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{ChapterIndexPort, FileReaderPort};
use crate::application::queries::{GetChapter, ListChapterFiles, ListChapters};
use crate::domain::chapter::{display_title, ChapterFile};

// ============================================================================
// Response DTOs
// ============================================================================

/// 章节列表项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterSummary {
    pub name: String,
    pub title: String,
}

impl From<String> for ChapterSummary {
    fn from(name: String) -> Self {
        Self {
            title: display_title(&name),
            name,
        }
    }
}

/// 章节页面内容（原始文本）
#[derive(Debug, Clone)]
pub struct ChapterPage {
    pub name: String,
    pub title: String,
    pub path: PathBuf,
    pub contents: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// ListChapters Handler
pub struct ListChaptersHandler {
    chapter_index: Arc<dyn ChapterIndexPort>,
}

impl ListChaptersHandler {
    pub fn new(chapter_index: Arc<dyn ChapterIndexPort>) -> Self {
        Self { chapter_index }
    }

    pub async fn handle(
        &self,
        _query: ListChapters,
    ) -> Result<Vec<ChapterSummary>, ApplicationError> {
        let names = self.chapter_index.list_chapters().await?;
        Ok(names.into_iter().map(ChapterSummary::from).collect())
    }
}

/// ListChapterFiles Handler
pub struct ListChapterFilesHandler {
    chapter_index: Arc<dyn ChapterIndexPort>,
}

impl ListChapterFilesHandler {
    pub fn new(chapter_index: Arc<dyn ChapterIndexPort>) -> Self {
        Self { chapter_index }
    }

    pub async fn handle(
        &self,
        _query: ListChapterFiles,
    ) -> Result<Vec<ChapterFile>, ApplicationError> {
        Ok(self.chapter_index.chapters().await?)
    }
}

/// GetChapter Handler
pub struct GetChapterHandler {
    chapter_index: Arc<dyn ChapterIndexPort>,
    file_reader: Arc<dyn FileReaderPort>,
}

impl GetChapterHandler {
    pub fn new(
        chapter_index: Arc<dyn ChapterIndexPort>,
        file_reader: Arc<dyn FileReaderPort>,
    ) -> Self {
        Self {
            chapter_index,
            file_reader,
        }
    }

    pub async fn handle(&self, query: GetChapter) -> Result<ChapterPage, ApplicationError> {
        if query.name.is_empty() {
            return Err(ApplicationError::validation("Chapter name cannot be empty"));
        }

        // 找不到对应文件时由调用方转换为 404
        let path = self
            .chapter_index
            .resolve_chapter(&query.name)
            .await?
            .ok_or_else(|| ApplicationError::chapter_not_found(&query.name))?;

        let contents = self.file_reader.read_to_string(&path).await?;

        Ok(ChapterPage {
            title: display_title(&query.name),
            name: query.name,
            path,
            contents,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::path::Path;

    use crate::domain::chapter::ChapterError;

    struct StaticIndex {
        chapters: Vec<ChapterFile>,
    }

    impl StaticIndex {
        fn new(file_names: &[&str]) -> Self {
            let dir = Path::new("chapters");
            Self {
                chapters: file_names
                    .iter()
                    .filter_map(|name| ChapterFile::from_file_name(dir, name))
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl ChapterIndexPort for StaticIndex {
        async fn chapters(&self) -> Result<Vec<ChapterFile>, ChapterError> {
            Ok(self.chapters.clone())
        }

        async fn resolve_chapter(&self, name: &str) -> Result<Option<PathBuf>, ChapterError> {
            Ok(self
                .chapters
                .iter()
                .find(|chapter| chapter.name == name)
                .map(|chapter| chapter.path.clone()))
        }
    }

    struct BrokenIndex;

    #[async_trait]
    impl ChapterIndexPort for BrokenIndex {
        async fn chapters(&self) -> Result<Vec<ChapterFile>, ChapterError> {
            Err(ChapterError::directory_access(
                "missing",
                std::io::ErrorKind::NotFound.into(),
            ))
        }

        async fn resolve_chapter(&self, _name: &str) -> Result<Option<PathBuf>, ChapterError> {
            Err(ChapterError::directory_access(
                "missing",
                std::io::ErrorKind::NotFound.into(),
            ))
        }
    }

    struct MemoryReader {
        files: HashMap<PathBuf, String>,
    }

    #[async_trait]
    impl FileReaderPort for MemoryReader {
        async fn read_to_string(&self, path: &Path) -> Result<String, ChapterError> {
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| ChapterError::file_read(path, std::io::ErrorKind::NotFound.into()))
        }
    }

    fn reader(entries: &[(&str, &str)]) -> Arc<MemoryReader> {
        Arc::new(MemoryReader {
            files: entries
                .iter()
                .map(|(path, contents)| (PathBuf::from(path), contents.to_string()))
                .collect(),
        })
    }

    #[tokio::test]
    async fn test_list_chapters_adds_titles() {
        let index = Arc::new(StaticIndex::new(&["01_intro.md", "02_setup.md"]));
        let handler = ListChaptersHandler::new(index);

        let chapters = handler.handle(ListChapters).await.unwrap();
        assert_eq!(
            chapters,
            vec![
                ChapterSummary {
                    name: "intro".to_string(),
                    title: "Intro".to_string(),
                },
                ChapterSummary {
                    name: "setup".to_string(),
                    title: "Setup".to_string(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_list_chapter_files() {
        let index = Arc::new(StaticIndex::new(&["01_intro.md", "02_setup.md"]));
        let handler = ListChapterFilesHandler::new(index);

        let files = handler.handle(ListChapterFiles).await.unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[1].order, 2);
        assert_eq!(files[1].path, PathBuf::from("chapters/02_setup.md"));
    }

    #[tokio::test]
    async fn test_get_chapter_reads_raw_contents() {
        let index = Arc::new(StaticIndex::new(&["01_intro.md"]));
        let handler = GetChapterHandler::new(
            index,
            reader(&[("chapters/01_intro.md", "# Intro\n\nHello")]),
        );

        let page = handler
            .handle(GetChapter {
                name: "intro".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(page.name, "intro");
        assert_eq!(page.title, "Intro");
        assert_eq!(page.contents, "# Intro\n\nHello");
        assert!(page.path.ends_with("01_intro.md"));
    }

    #[tokio::test]
    async fn test_get_unknown_chapter_is_not_found() {
        let index = Arc::new(StaticIndex::new(&["01_intro.md"]));
        let handler = GetChapterHandler::new(index, reader(&[]));

        let err = handler
            .handle(GetChapter {
                name: "missing".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::ChapterNotFound(name) if name == "missing"));
    }

    #[tokio::test]
    async fn test_get_chapter_rejects_empty_name() {
        let index = Arc::new(StaticIndex::new(&["01_intro.md"]));
        let handler = GetChapterHandler::new(index, reader(&[]));

        let err = handler
            .handle(GetChapter {
                name: String::new(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_directory_error_propagates() {
        let handler = ListChaptersHandler::new(Arc::new(BrokenIndex));
        let err = handler.handle(ListChapters).await.unwrap_err();
        assert!(matches!(err, ApplicationError::DirectoryAccess(_)));

        let handler = GetChapterHandler::new(Arc::new(BrokenIndex), reader(&[]));
        let err = handler
            .handle(GetChapter {
                name: "intro".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::DirectoryAccess(_)));
    }

    #[tokio::test]
    async fn test_read_failure_maps_to_file_read() {
        let index = Arc::new(StaticIndex::new(&["01_intro.md"]));
        let handler = GetChapterHandler::new(index, reader(&[]));

        let err = handler
            .handle(GetChapter {
                name: "intro".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::FileRead(_)));
    }
}

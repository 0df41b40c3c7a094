//! Chapter Queries

/// 列出所有章节查询（按文件名排序）
#[derive(Debug, Clone)]
pub struct ListChapters;

/// 列出所有章节文件（含序号与路径）
#[derive(Debug, Clone)]
pub struct ListChapterFiles;

/// 获取章节内容查询
#[derive(Debug, Clone)]
pub struct GetChapter {
    pub name: String,
}

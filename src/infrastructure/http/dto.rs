//! Data Transfer Objects

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

use crate::application::{ChapterPage, ChapterSummary};
use crate::domain::chapter::ChapterFile;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Chapter DTOs
// ============================================================================

/// 章节列表项
#[derive(Debug, Serialize)]
pub struct ChapterItemResponse {
    pub order: u64,
    pub name: String,
    pub title: String,
}

impl From<ChapterFile> for ChapterItemResponse {
    fn from(chapter: ChapterFile) -> Self {
        Self {
            order: chapter.order,
            title: chapter.title(),
            name: chapter.name,
        }
    }
}

/// 章节内容（原始 markdown 文本）
#[derive(Debug, Serialize)]
pub struct ChapterContentResponse {
    pub name: String,
    pub title: String,
    pub contents: String,
}

impl From<ChapterPage> for ChapterContentResponse {
    fn from(page: ChapterPage) -> Self {
        Self {
            name: page.name,
            title: page.title,
            contents: page.contents,
        }
    }
}

/// 路径段中保留的字符: A-Z a-z 0-9 - . _ ~
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// 首页链接
#[derive(Debug, Clone)]
pub struct ChapterLink {
    pub href: String,
    pub title: String,
}

impl From<ChapterSummary> for ChapterLink {
    fn from(summary: ChapterSummary) -> Self {
        Self {
            href: format!(
                "/chapter/{}",
                utf8_percent_encode(&summary.name, PATH_SEGMENT_ENCODE_SET)
            ),
            title: summary.title,
        }
    }
}

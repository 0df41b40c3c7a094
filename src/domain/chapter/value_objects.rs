//! Chapter Context - Value Objects

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// 章节文件名格式: `<order>_<name>.md`，序号只接受 ASCII 数字
static CHAPTER_FILE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)_(.+)\.md$").expect("valid chapter file name pattern"));

/// 章节文件
///
/// 由文件名派生，每次扫描目录时重新计算，不做缓存
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterFile {
    /// 文件名前缀中的序号
    pub order: u64,
    /// 章节名（逻辑标识）
    pub name: String,
    /// 文件路径
    pub path: PathBuf,
}

impl ChapterFile {
    /// 从目录中的文件名构造章节
    ///
    /// 文件名不符合 `<digits>_<name>.md` 时返回 `None`
    pub fn from_file_name(dir: &Path, file_name: &str) -> Option<Self> {
        let (order, name) = parse_chapter_file_name(file_name)?;
        Some(Self {
            order,
            name: name.to_string(),
            path: dir.join(file_name),
        })
    }

    /// 展示用标题
    pub fn title(&self) -> String {
        display_title(&self.name)
    }
}

/// 解析章节文件名，返回 (序号, 章节名)
///
/// 序号超出 u64 范围时取 `u64::MAX`，文件仍视为章节
pub fn parse_chapter_file_name(file_name: &str) -> Option<(u64, &str)> {
    let caps = CHAPTER_FILE_NAME.captures(file_name)?;
    let digits = caps.get(1)?.as_str();
    let name = caps.get(2)?.as_str();
    let order = digits.parse::<u64>().unwrap_or(u64::MAX);
    Some((order, name))
}

/// 章节名首字母大写，用于页面展示
pub fn display_title(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

//! Chapter Context - 章节限界上下文
//!
//! 职责:
//! - 章节文件名解析（`<order>_<name>.md`）
//! - 章节展示名
//! - 章节目录相关错误

mod errors;
mod value_objects;

pub use errors::ChapterError;
pub use value_objects::{display_title, parse_chapter_file_name, ChapterFile};

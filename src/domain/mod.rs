//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Chapter Context: 章节文件与章节名

pub mod chapter;

pub use chapter::{ChapterError, ChapterFile};

//! Chapterbook - 章节目录 Web 服务
//!
//! 把一个目录中的 `<order>_<name>.md` 文件作为网页提供：章节首页和章节页。
//!
//! 领域层 (domain/):
//! - Chapter Context: 章节文件名解析
//!
//! 应用层 (application/):
//! - Ports: ChapterIndex, FileReader
//! - Queries: 章节列表、章节内容
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: 文件系统章节索引与文件读取
//! - HTTP: HTML 页面 + JSON API

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};

//! 应用层 - 查询（读操作）
//!
//! 本服务只有读操作，没有命令侧

mod chapter_queries;

pub mod handlers;

pub use chapter_queries::*;

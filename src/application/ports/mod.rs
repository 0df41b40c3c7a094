//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod chapter_index;
mod file_reader;

pub use chapter_index::ChapterIndexPort;
pub use file_reader::FileReaderPort;

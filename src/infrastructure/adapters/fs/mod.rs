//! Filesystem Adapters

mod chapter_index;
mod file_reader;

pub use chapter_index::FsChapterIndex;
pub use file_reader::FsFileReader;

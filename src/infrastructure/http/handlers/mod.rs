//! HTTP Handlers

mod chapter;
mod pages;
mod ping;

pub use chapter::*;
pub use pages::*;
pub use ping::*;

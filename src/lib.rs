// ── Safety policy ────────────────────────────────────────────────────────────
// hilite has no FFI and no reason for unsafe code anywhere.
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod highlight;
pub mod render;
pub mod theme;
pub mod vocabulary;

pub use error::{HiliteError, Result};
pub use highlight::{
    highlight, Category, CommentMode, Highlighted, Highlighter, RenderedLine, Token,
};
pub use render::{render, OutputFormat, RenderOptions};
pub use vocabulary::Vocabulary;

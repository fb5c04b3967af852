//! Document model and markdown block parsing.
//!
//! This module handles:
//! - Splitting raw markdown into block-level elements
//! - Title extraction (first `# ` line, else the file name)
//!
//! Inline markup inside paragraphs and bullets is left embedded in the raw
//! strings; the `inline` and `highlight` modules resolve it at render time.

mod parser;
mod types;

pub use parser::parse;
pub use types::{Block, Document};

// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. library::LibraryEntry)
    clippy::module_name_repetitions
)]

//! # Inklet
//!
//! A terminal markdown reader with regex-driven syntax highlighting.
//!
//! Inklet turns a directory of markdown files into styled reader content:
//! - Block parsing (headings, paragraphs, bullets, fenced code)
//! - Inline styling (bold, inline code, links with url annotations)
//! - Regex rule-table syntax highlighting with dark/light palettes
//!
//! ## Architecture
//!
//! The core is a set of pure functions: whole text in, styled values out.
//! Parsing and highlighting never fail; malformed input degrades to literal
//! text. The only fallible surface is the `library` file-system boundary.
//!
//! ## Modules
//!
//! - [`document`]: Block parsing and the document model
//! - [`inline`]: Inline markdown rendering
//! - [`highlight`]: Syntax highlighting and palettes
//! - [`styled`]: Back-end-independent styled text values
//! - [`library`]: Markdown file discovery and reading
//! - [`ansi`]: Terminal escape-sequence back-end

pub mod ansi;
pub mod config;
pub mod document;
pub mod highlight;
pub mod inline;
pub mod library;
pub mod perf;
pub mod styled;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::document::{Block, Document};
    pub use crate::highlight::{Palette, highlight};
    pub use crate::inline::render_inline;
    pub use crate::styled::{Rgb, StylePatch, StyledText};
}

//! Core document types.

/// One structural unit of a parsed document.
///
/// Block payloads carry raw substrings; any inline markup they contain is
/// resolved later by the inline renderer or the syntax highlighter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Plain paragraph text, buffered lines joined by `\n`.
    Paragraph(String),
    /// `## ` (level 2) or `### ` (level 3) heading.
    Subheading { text: String, level: u8 },
    /// Bullet items. The parser emits one single-item list per consumed
    /// `- ` line; consecutive bullets do not coalesce.
    BulletList(Vec<String>),
    /// Fenced code with the fence's trailing text as the language tag.
    CodeBlock {
        code: String,
        language: Option<String>,
    },
    /// Reserved: no table syntax is recognized, so the parser never
    /// produces this variant and back-ends skip it.
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

/// A parsed markdown document: a title plus an ordered block list.
///
/// Blocks are append-only during parse and frozen afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    title: String,
    blocks: Vec<Block>,
}

impl Document {
    /// Create an empty, untitled document.
    pub const fn empty() -> Self {
        Self {
            title: String::new(),
            blocks: Vec::new(),
        }
    }

    pub(crate) const fn new(title: String, blocks: Vec<Block>) -> Self {
        Self { title, blocks }
    }

    /// The document title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Blocks in document order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }
}

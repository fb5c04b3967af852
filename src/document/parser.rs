//! Line-oriented markdown block parsing.
//!
//! A single pass over the source classifies each line in a fixed precedence
//! order: code-fence toggle, in-fence buffering, `### `, `## `, `- `, blank
//! (paragraph flush), paragraph buffer append. The parser is total: malformed
//! input degrades rather than failing.

use super::types::{Block, Document};

impl Document {
    /// Parse markdown source into a Document.
    ///
    /// `file_name_hint` supplies the title when no `# ` line exists.
    ///
    /// # Example
    ///
    /// ```
    /// use inklet::document::Document;
    ///
    /// let doc = Document::parse("notes.md", "# Hello\n\nWorld");
    /// assert_eq!(doc.title(), "Hello");
    /// assert_eq!(doc.block_count(), 1);
    /// ```
    pub fn parse(file_name_hint: &str, source: &str) -> Self {
        parse(file_name_hint, source)
    }
}

/// Parse markdown source into a Document.
pub fn parse(file_name_hint: &str, source: &str) -> Document {
    let _scope = crate::perf::scope("document.parse");
    let lines: Vec<&str> = source.lines().collect();

    // The whole text is scanned for the title, but the body builder always
    // starts at line index 1: line 0 is dropped whether or not it carried
    // the title.
    let title = lines
        .iter()
        .find_map(|line| line.strip_prefix("# "))
        .map_or_else(
            || title_from_hint(file_name_hint),
            |rest| rest.trim().to_string(),
        );

    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut code: Vec<&str> = Vec::new();
    let mut language: Option<String> = None;
    let mut in_fence = false;

    for &line in lines.iter().skip(1) {
        let trimmed = line.trim();
        if trimmed.starts_with("```") {
            if in_fence {
                blocks.push(Block::CodeBlock {
                    code: code.join("\n"),
                    language: language.take(),
                });
                code.clear();
                in_fence = false;
            } else {
                flush_paragraph(&mut paragraph, &mut blocks);
                let tag = trimmed.trim_start_matches('`').trim();
                language = if tag.is_empty() {
                    None
                } else {
                    Some(tag.to_string())
                };
                in_fence = true;
            }
        } else if in_fence {
            // Raw line, no further classification.
            code.push(line);
        } else if let Some(rest) = trimmed.strip_prefix("### ") {
            flush_paragraph(&mut paragraph, &mut blocks);
            blocks.push(Block::Subheading {
                text: rest.to_string(),
                level: 3,
            });
        } else if let Some(rest) = trimmed.strip_prefix("## ") {
            flush_paragraph(&mut paragraph, &mut blocks);
            blocks.push(Block::Subheading {
                text: rest.to_string(),
                level: 2,
            });
        } else if let Some(rest) = trimmed.strip_prefix("- ") {
            flush_paragraph(&mut paragraph, &mut blocks);
            blocks.push(Block::BulletList(vec![rest.to_string()]));
        } else if trimmed.is_empty() {
            flush_paragraph(&mut paragraph, &mut blocks);
        } else {
            paragraph.push(line);
        }
    }

    // An unterminated fence never reaches the closing branch, so its
    // buffered lines are dropped at end of input.
    flush_paragraph(&mut paragraph, &mut blocks);

    Document::new(title, blocks)
}

fn flush_paragraph(paragraph: &mut Vec<&str>, blocks: &mut Vec<Block>) {
    if !paragraph.is_empty() {
        blocks.push(Block::Paragraph(paragraph.join("\n")));
        paragraph.clear();
    }
}

fn title_from_hint(hint: &str) -> String {
    hint.rsplit_once('.')
        .map_or(hint, |(stem, _ext)| stem)
        .to_string()
}

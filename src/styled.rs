//! Styled text values, independent of any terminal back-end.
//!
//! A [`StyledText`] is a plain string plus an ordered list of
//! (range, style-patch) overlays and a (range, url) annotation table.
//! Ranges are half-open character offsets into the output string and may
//! overlap; when they do, the later-applied patch wins per attribute.

use std::ops::Range;

/// RGB color used for all styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Relative luminance in `0.0..=1.0` (Rec. 709 coefficients).
    pub fn luminance(self) -> f32 {
        ((0.2126 * f32::from(self.r)) + (0.7152 * f32::from(self.g)) + (0.0722 * f32::from(self.b)))
            / 255.0
    }
}

/// A partial style. Unset attributes leave whatever an earlier overlay
/// applied; set attributes override it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StylePatch {
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
    pub bold: bool,
    pub underline: bool,
    pub monospace: bool,
}

impl StylePatch {
    pub const fn fg(color: Rgb) -> Self {
        Self {
            fg: Some(color),
            bg: None,
            bold: false,
            underline: false,
            monospace: false,
        }
    }

    #[must_use]
    pub const fn with_bg(mut self, color: Rgb) -> Self {
        self.bg = Some(color);
        self
    }

    #[must_use]
    pub const fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub const fn with_underline(mut self) -> Self {
        self.underline = true;
        self
    }

    #[must_use]
    pub const fn with_monospace(mut self) -> Self {
        self.monospace = true;
        self
    }

    /// Layer `later` on top of `self`, per attribute.
    #[must_use]
    pub fn overlaid(self, later: Self) -> Self {
        Self {
            fg: later.fg.or(self.fg),
            bg: later.bg.or(self.bg),
            bold: self.bold || later.bold,
            underline: self.underline || later.underline,
            monospace: self.monospace || later.monospace,
        }
    }
}

/// One styled range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSpan {
    pub range: Range<usize>,
    pub patch: StylePatch,
}

/// A clickable-url annotation over a range of the output string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlAnnotation {
    pub range: Range<usize>,
    pub url: String,
}

/// A string plus positional style and annotation metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledText {
    text: String,
    char_len: usize,
    spans: Vec<StyleSpan>,
    annotations: Vec<UrlAnnotation>,
}

impl StyledText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from plain text with no style records.
    pub fn from_plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            char_len: text.chars().count(),
            spans: Vec::new(),
            annotations: Vec::new(),
        }
    }

    /// The output string.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the output string in characters.
    pub const fn char_len(&self) -> usize {
        self.char_len
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Style records in application order.
    pub fn spans(&self) -> &[StyleSpan] {
        &self.spans
    }

    pub fn annotations(&self) -> &[UrlAnnotation] {
        &self.annotations
    }

    /// Append unstyled text.
    pub fn push_plain(&mut self, text: &str) {
        self.text.push_str(text);
        self.char_len += text.chars().count();
    }

    /// Append a single unstyled character.
    pub fn push_char(&mut self, ch: char) {
        self.text.push(ch);
        self.char_len += 1;
    }

    /// Append text covered by `patch`.
    pub fn push_styled(&mut self, text: &str, patch: StylePatch) {
        let start = self.char_len;
        self.push_plain(text);
        if start < self.char_len {
            self.spans.push(StyleSpan {
                range: start..self.char_len,
                patch,
            });
        }
    }

    /// Append styled text carrying a url annotation over its range.
    pub fn push_link(&mut self, label: &str, patch: StylePatch, url: &str) {
        let start = self.char_len;
        self.push_styled(label, patch);
        self.annotations.push(UrlAnnotation {
            range: start..self.char_len,
            url: url.to_string(),
        });
    }

    /// Overlay `patch` on an existing character range. Out-of-bounds ends
    /// are clamped; empty ranges are dropped.
    pub fn paint(&mut self, range: Range<usize>, patch: StylePatch) {
        let start = range.start.min(self.char_len);
        let end = range.end.min(self.char_len);
        if start < end {
            self.spans.push(StyleSpan {
                range: start..end,
                patch,
            });
        }
    }

    /// Resolve the effective style at a character offset by folding every
    /// covering span in application order.
    pub fn style_at(&self, index: usize) -> StylePatch {
        self.spans
            .iter()
            .filter(|span| span.range.contains(&index))
            .fold(StylePatch::default(), |acc, span| acc.overlaid(span.patch))
    }

    /// The url annotation covering a character offset, if any.
    pub fn url_at(&self, index: usize) -> Option<&str> {
        self.annotations
            .iter()
            .find(|a| a.range.contains(&index))
            .map(|a| a.url.as_str())
    }
}

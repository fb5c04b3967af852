//! Color palettes for syntax highlighting.
//!
//! Two fixed seven-slot tables (dark/light) plus the eight-color rainbow
//! used for CSV cells. All values are immutable constants.

use crate::styled::Rgb;

/// Semantic token category a highlight rule colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Str,
    Number,
    Comment,
    Type,
    Tag,
}

/// Seven named colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub base: Rgb,
    pub keyword: Rgb,
    pub string: Rgb,
    pub number: Rgb,
    pub comment: Rgb,
    pub type_name: Rgb,
    pub tag: Rgb,
}

impl Palette {
    /// Dark-theme table (One-Dark-like values).
    pub const DARK: Self = Self {
        base: Rgb::new(0xAB, 0xB2, 0xBF),
        keyword: Rgb::new(0xC6, 0x78, 0xDD),
        string: Rgb::new(0x98, 0xC3, 0x79),
        number: Rgb::new(0xD1, 0x9A, 0x66),
        comment: Rgb::new(0x5C, 0x63, 0x70),
        type_name: Rgb::new(0xE5, 0xC0, 0x7B),
        tag: Rgb::new(0xE0, 0x6C, 0x75),
    };

    /// Light-theme table (One-Light-like values).
    pub const LIGHT: Self = Self {
        base: Rgb::new(0x38, 0x3A, 0x42),
        keyword: Rgb::new(0xA6, 0x26, 0xA4),
        string: Rgb::new(0x50, 0xA1, 0x4F),
        number: Rgb::new(0x98, 0x68, 0x01),
        comment: Rgb::new(0xA0, 0xA1, 0xA7),
        type_name: Rgb::new(0xC1, 0x84, 0x01),
        tag: Rgb::new(0xE4, 0x56, 0x49),
    };

    pub const fn for_theme(dark: bool) -> Self {
        if dark { Self::DARK } else { Self::LIGHT }
    }

    /// The color for one token category.
    pub const fn color(&self, kind: TokenKind) -> Rgb {
        match kind {
            TokenKind::Keyword => self.keyword,
            TokenKind::Str => self.string,
            TokenKind::Number => self.number,
            TokenKind::Comment => self.comment,
            TokenKind::Type => self.type_name,
            TokenKind::Tag => self.tag,
        }
    }
}

/// Fixed rainbow cycled through CSV cells (`index % 8`).
pub const CSV_RAINBOW: [Rgb; 8] = [
    Rgb::new(0xE0, 0x6C, 0x75),
    Rgb::new(0xD1, 0x9A, 0x66),
    Rgb::new(0xE5, 0xC0, 0x7B),
    Rgb::new(0x98, 0xC3, 0x79),
    Rgb::new(0x56, 0xB6, 0xC2),
    Rgb::new(0x61, 0xAF, 0xEF),
    Rgb::new(0xC6, 0x78, 0xDD),
    Rgb::new(0xBE, 0x50, 0x46),
];

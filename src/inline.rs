//! Inline markdown rendering for paragraph and bullet text.
//!
//! A single left-to-right scan with one position of lookahead. At each
//! position the probes run in order: `**bold**`, `` `code` ``, then
//! `[label](url)`. The first match wins; when none matches the current
//! character is copied through unstyled and the scan advances by one, so an
//! unmatched marker degrades to literal text instead of failing. There is no
//! nesting: emphasis inside emphasis is not recognized.

use crate::styled::{Rgb, StylePatch, StyledText};

/// Bold accent over dark backgrounds.
pub const NEON_MAGENTA: Rgb = Rgb::new(255, 60, 240);
/// Bold accent over light backgrounds.
pub const RICH_RASPBERRY: Rgb = Rgb::new(179, 68, 108);
/// Fixed link color.
pub const LINK_BLUE: Rgb = Rgb::new(88, 166, 255);

/// Render one paragraph or bullet string to styled text.
///
/// `code_background` fills inline code spans and selects the bold accent:
/// luminance below 0.5 picks [`NEON_MAGENTA`], otherwise [`RICH_RASPBERRY`].
pub fn render_inline(text: &str, code_background: Rgb) -> StyledText {
    let _scope = crate::perf::scope("inline.render");
    let chars: Vec<char> = text.chars().collect();
    let accent = if code_background.luminance() < 0.5 {
        NEON_MAGENTA
    } else {
        RICH_RASPBERRY
    };

    let mut out = StyledText::new();
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '*' && chars.get(i + 1) == Some(&'*') {
            if let Some(close) = find_double_star(&chars, i + 2) {
                let inner: String = chars[i + 2..close].iter().collect();
                out.push_styled(&inner, StylePatch::fg(accent).with_bold());
                i = close + 2;
                continue;
            }
        } else if chars[i] == '`' {
            if let Some(close) = find_char(&chars, i + 1, '`') {
                let inner: String = chars[i + 1..close].iter().collect();
                out.push_styled(
                    &inner,
                    StylePatch::default()
                        .with_monospace()
                        .with_bg(code_background),
                );
                i = close + 1;
                continue;
            }
        } else if chars[i] == '['
            && let Some(bracket) = find_char(&chars, i + 1, ']')
            // The `(` must sit immediately after the `]`.
            && chars.get(bracket + 1) == Some(&'(')
            && let Some(paren) = find_char(&chars, bracket + 2, ')')
        {
            let label: String = chars[i + 1..bracket].iter().collect();
            let url: String = chars[bracket + 2..paren].iter().collect();
            out.push_link(
                &label,
                StylePatch::fg(LINK_BLUE).with_underline(),
                &url,
            );
            i = paren + 1;
            continue;
        }

        // No probe matched: copy one character and reprocess from the next.
        out.push_char(chars[i]);
        i += 1;
    }

    out
}

fn find_double_star(chars: &[char], from: usize) -> Option<usize> {
    let last = chars.len().checked_sub(1)?;
    (from..last).find(|&j| chars[j] == '*' && chars[j + 1] == '*')
}

fn find_char(chars: &[char], from: usize, target: char) -> Option<usize> {
    (from..chars.len()).find(|&j| chars[j] == target)
}

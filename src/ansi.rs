//! ANSI terminal back-end for styled text.
//!
//! Resolves the effective style per character (last-applied span wins per
//! attribute) and emits SGR sequences, grouping runs of identical style.
//! Truecolor is used when the terminal advertises it, with an xterm-256
//! color-cube fallback otherwise.

use crate::styled::{Rgb, StylePatch, StyledText};

const RESET: &str = "\x1b[0m";

/// Render styled text to a string of ANSI escapes, detecting truecolor
/// support from the environment.
pub fn render(styled: &StyledText) -> String {
    render_with_truecolor(styled, supports_truecolor())
}

/// Render styled text with an explicit truecolor capability.
pub fn render_with_truecolor(styled: &StyledText, truecolor: bool) -> String {
    let _scope = crate::perf::scope("ansi.render");
    let mut out = String::with_capacity(styled.text().len());
    let mut current: Option<StylePatch> = None;
    let mut active = false;

    for (idx, ch) in styled.text().chars().enumerate() {
        let style = styled.style_at(idx);
        if current != Some(style) {
            if active {
                out.push_str(RESET);
                active = false;
            }
            let codes = sgr(style, truecolor);
            if !codes.is_empty() {
                out.push_str(&codes);
                active = true;
            }
            current = Some(style);
        }
        out.push(ch);
    }

    if active {
        out.push_str(RESET);
    }
    out
}

fn sgr(style: StylePatch, truecolor: bool) -> String {
    let mut codes: Vec<String> = Vec::new();
    if style.bold {
        codes.push("1".to_string());
    }
    if style.underline {
        codes.push("4".to_string());
    }
    if let Some(fg) = style.fg {
        codes.push(color_code(fg, truecolor, false));
    }
    if let Some(bg) = style.bg {
        codes.push(color_code(bg, truecolor, true));
    }
    // Monospace has no SGR equivalent; the terminal is already monospace.
    if codes.is_empty() {
        String::new()
    } else {
        format!("\x1b[{}m", codes.join(";"))
    }
}

fn color_code(color: Rgb, truecolor: bool, background: bool) -> String {
    let plane = if background { 48 } else { 38 };
    if truecolor {
        format!("{plane};2;{};{};{}", color.r, color.g, color.b)
    } else {
        format!("{plane};5;{}", rgb_to_xterm_256(color.r, color.g, color.b))
    }
}

fn supports_truecolor() -> bool {
    supports_truecolor_from_env(
        std::env::var("COLORTERM").ok().as_deref(),
        std::env::var("TERM").ok().as_deref(),
    )
}

fn supports_truecolor_from_env(colorterm: Option<&str>, term: Option<&str>) -> bool {
    if let Some(ct) = colorterm {
        let lower = ct.to_ascii_lowercase();
        if lower.contains("truecolor") || lower.contains("24bit") {
            return true;
        }
    }
    if let Some(t) = term {
        let lower = t.to_ascii_lowercase();
        if lower.contains("direct") || lower.contains("truecolor") {
            return true;
        }
    }
    false
}

fn rgb_to_xterm_256(r: u8, g: u8, b: u8) -> u8 {
    // Result is always 0-5, fits in u8
    #[allow(clippy::cast_possible_truncation)]
    let to_cube = |v: u8| ((u16::from(v) * 5) / 255) as u8;
    let ri = to_cube(r);
    let gi = to_cube(g);
    let bi = to_cube(b);
    16 + (36 * ri) + (6 * gi) + bi
}

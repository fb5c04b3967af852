//! Regex-driven syntax highlighting for code blocks.
//!
//! The whole code string is painted with the theme's base color first, then
//! each of the language's rules scans the original text independently and
//! repaints its matches. Rules are not mutually exclusive: where ranges
//! intersect, the later rule in the list wins. There is no lexical awareness
//! of nesting, so a keyword inside a string literal is repainted by whichever
//! rule runs later.

mod palette;
mod rules;

pub use palette::{CSV_RAINBOW, Palette, TokenKind};

use crate::styled::{StylePatch, StyledText};

/// Highlight a code block.
///
/// Unrecognized or absent language tags get the base color only. The result
/// is a pure function of the arguments; callers may cache it keyed by
/// (code, language, theme).
pub fn highlight(code: &str, language: Option<&str>, dark: bool) -> StyledText {
    let _scope = crate::perf::scope("highlight.code");
    let palette = Palette::for_theme(dark);

    let mut out = StyledText::from_plain(code);
    out.paint(0..out.char_len(), StylePatch::fg(palette.base));

    let Some(tag) = language else {
        return out;
    };
    let tag = tag.to_ascii_lowercase();

    if tag == "csv" {
        highlight_csv(code, &palette, &mut out);
        return out;
    }

    let Some(rules) = rules::rules_for(&tag) else {
        return out;
    };

    for rule in rules {
        let color = palette.color(rule.kind);
        for caps in rule.pattern.captures_iter(code) {
            if let Some(m) = caps.get(rule.group) {
                out.paint(char_range(code, m.start(), m.end()), StylePatch::fg(color));
            }
        }
    }

    out
}

/// CSV gets no patterns: a manual scan splits on literal commas (quoted
/// commas are not recognized), cycles cells through the eight-color rainbow
/// and paints each separator with the comment color.
fn highlight_csv(code: &str, palette: &Palette, out: &mut StyledText) {
    let mut cell = 0usize;
    let mut cell_start = 0usize;
    let mut offset = 0usize;

    for ch in code.chars() {
        if ch == ',' {
            out.paint(cell_start..offset, StylePatch::fg(CSV_RAINBOW[cell % 8]));
            out.paint(offset..offset + 1, StylePatch::fg(palette.comment));
            cell += 1;
            cell_start = offset + 1;
        }
        offset += 1;
    }
    out.paint(cell_start..offset, StylePatch::fg(CSV_RAINBOW[cell % 8]));
}

/// Convert a regex byte range on `text` into a character range.
fn char_range(text: &str, start: usize, end: usize) -> std::ops::Range<usize> {
    let chars_before = text[..start].chars().count();
    let chars_inside = text[start..end].chars().count();
    chars_before..chars_before + chars_inside
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_code_yields_empty_result() {
        let styled = highlight("", Some("python"), true);
        assert!(styled.is_empty());
        assert!(styled.spans().is_empty());
    }

    #[test]
    fn test_unknown_language_gets_base_color_only() {
        let styled = highlight("anything at all", Some("cobol"), true);
        assert_eq!(styled.spans().len(), 1);
        assert_eq!(styled.spans()[0].patch.fg, Some(Palette::DARK.base));
        assert_eq!(styled.spans()[0].range, 0..15);
    }

    #[test]
    fn test_absent_language_gets_base_color_only() {
        let styled = highlight("plain text", None, false);
        assert_eq!(styled.spans().len(), 1);
        assert_eq!(styled.spans()[0].patch.fg, Some(Palette::LIGHT.base));
    }

    #[test]
    fn test_language_tag_is_case_insensitive() {
        let upper = highlight("x = 1", Some("Python"), true);
        let lower = highlight("x = 1", Some("python"), true);
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_python_number_and_comment() {
        // "x = 1 # comment" in the light theme: the numeral gets the number
        // color, `#` through end of line the comment color, x/= stay base.
        let code = "x = 1 # comment";
        let styled = highlight(code, Some("python"), false);
        let palette = Palette::LIGHT;

        assert_eq!(styled.style_at(0).fg, Some(palette.base));
        assert_eq!(styled.style_at(2).fg, Some(palette.base));
        assert_eq!(styled.style_at(4).fg, Some(palette.number));
        for idx in 6..code.len() {
            assert_eq!(styled.style_at(idx).fg, Some(palette.comment), "at {idx}");
        }
    }

    #[test]
    fn test_python_keyword_and_string() {
        let styled = highlight("def f():\n    return 'hi'", Some("python"), true);
        let palette = Palette::DARK;
        assert_eq!(styled.style_at(0).fg, Some(palette.keyword));
        assert_eq!(styled.style_at(13).fg, Some(palette.keyword));
        assert_eq!(styled.style_at(20).fg, Some(palette.string));
    }

    #[test]
    fn test_type_heuristic_colors_capitalized_identifier() {
        let styled = highlight("x = Widget()", Some("python"), true);
        assert_eq!(styled.style_at(4).fg, Some(Palette::DARK.type_name));
    }

    #[test]
    fn test_comment_rule_runs_last_and_wins_overlap() {
        // The numeral sits inside a comment; the comment rule runs later
        // and repaints it.
        let styled = highlight("# has 42 inside", Some("python"), true);
        assert_eq!(styled.style_at(6).fg, Some(Palette::DARK.comment));
    }

    #[test]
    fn test_sql_keywords_any_case() {
        let styled = highlight("SELECT id FROM t", Some("sql"), true);
        let palette = Palette::DARK;
        assert_eq!(styled.style_at(0).fg, Some(palette.keyword));
        assert_eq!(styled.style_at(10).fg, Some(palette.keyword));
        assert_eq!(styled.style_at(7).fg, Some(palette.base));
    }

    #[test]
    fn test_json_keys_are_keywords_values_are_strings() {
        let code = r#"{"name": "deck", "count": 3}"#;
        let styled = highlight(code, Some("json"), true);
        let palette = Palette::DARK;

        // "name" including its quotes
        assert_eq!(styled.style_at(1).fg, Some(palette.keyword));
        assert_eq!(styled.style_at(6).fg, Some(palette.keyword));
        // the colon stays base
        assert_eq!(styled.style_at(7).fg, Some(palette.base));
        // "deck" including its quotes
        assert_eq!(styled.style_at(9).fg, Some(palette.string));
        assert_eq!(styled.style_at(14).fg, Some(palette.string));
        // numeral value
        assert_eq!(styled.style_at(26).fg, Some(palette.number));
    }

    #[test]
    fn test_yaml_keys_and_quoted_values() {
        let code = "name: \"deck\"\ncount: 3";
        let styled = highlight(code, Some("yaml"), true);
        let palette = Palette::DARK;

        assert_eq!(styled.style_at(0).fg, Some(palette.keyword));
        assert_eq!(styled.style_at(6).fg, Some(palette.string));
        assert_eq!(styled.style_at(13).fg, Some(palette.keyword));
        assert_eq!(styled.style_at(20).fg, Some(palette.number));
    }

    #[test]
    fn test_xml_tags_attributes_values_comments() {
        let code = r#"<item id="1"><!-- note --></item>"#;
        let styled = highlight(code, Some("xml"), true);
        let palette = Palette::DARK;

        assert_eq!(styled.style_at(1).fg, Some(palette.tag)); // item
        assert_eq!(styled.style_at(6).fg, Some(palette.keyword)); // id
        assert_eq!(styled.style_at(9).fg, Some(palette.string)); // "1"
        assert_eq!(styled.style_at(15).fg, Some(palette.comment)); // <!--
        assert_eq!(styled.style_at(28).fg, Some(palette.tag)); // closing item
    }

    #[test]
    fn test_csv_rainbow_cells_and_comment_commas() {
        let styled = highlight("a,b,c", Some("csv"), true);
        let palette = Palette::DARK;

        assert_eq!(styled.style_at(0).fg, Some(CSV_RAINBOW[0]));
        assert_eq!(styled.style_at(1).fg, Some(palette.comment));
        assert_eq!(styled.style_at(2).fg, Some(CSV_RAINBOW[1]));
        assert_eq!(styled.style_at(3).fg, Some(palette.comment));
        assert_eq!(styled.style_at(4).fg, Some(CSV_RAINBOW[2]));
    }

    #[test]
    fn test_csv_rainbow_wraps_after_eight_cells() {
        let styled = highlight("a,b,c,d,e,f,g,h,i", Some("csv"), true);
        // cell 8 (ninth) wraps back to the first rainbow color
        assert_eq!(styled.style_at(16).fg, Some(CSV_RAINBOW[0]));
    }

    #[test]
    fn test_csv_empty_cells_still_advance_the_cycle() {
        let styled = highlight("a,,c", Some("csv"), true);
        assert_eq!(styled.style_at(0).fg, Some(CSV_RAINBOW[0]));
        assert_eq!(styled.style_at(3).fg, Some(CSV_RAINBOW[2]));
    }

    #[test]
    fn test_highlight_is_idempotent() {
        let a = highlight("def f(): return 1", Some("python"), true);
        let b = highlight("def f(): return 1", Some("python"), true);
        assert_eq!(a, b);
    }

    #[test]
    fn test_plain_text_projection_preserves_input() {
        let code = "SELECT 'quoted' FROM t -- note";
        let styled = highlight(code, Some("sql"), false);
        assert_eq!(styled.text(), code);
    }

    #[test]
    fn test_multibyte_code_ranges_are_char_offsets() {
        let styled = highlight("s = 'héllo'", Some("python"), true);
        // the string literal spans chars 4..11
        assert_eq!(styled.style_at(4).fg, Some(Palette::DARK.string));
        assert_eq!(styled.style_at(10).fg, Some(Palette::DARK.string));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn text_projection_always_preserves_input(
                code in ".*",
                lang in proptest::option::of("[a-z#]{1,8}"),
                dark in proptest::bool::ANY,
            ) {
                let styled = highlight(&code, lang.as_deref(), dark);
                prop_assert_eq!(styled.text(), code.as_str());
            }

            #[test]
            fn every_span_stays_in_bounds(code in ".{0,200}") {
                let styled = highlight(&code, Some("python"), true);
                for span in styled.spans() {
                    prop_assert!(span.range.start < span.range.end);
                    prop_assert!(span.range.end <= styled.char_len());
                }
            }
        }
    }
}

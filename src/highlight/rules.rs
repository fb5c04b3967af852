//! Per-language highlight rule tables.
//!
//! Each language is an ordered list of (pattern, token-kind) rules. Every
//! rule scans the original code string independently; because later rules
//! repaint overlapping ranges, the order of each list is normative paint
//! order and must not be rearranged.

use once_cell::sync::Lazy;
use regex::Regex;

use super::palette::TokenKind;

/// One rule: a compiled pattern, the capture group to color (0 = whole
/// match), and the palette slot to paint it with.
#[derive(Debug)]
pub struct Rule {
    pub pattern: Regex,
    pub group: usize,
    pub kind: TokenKind,
}

impl Rule {
    fn new(pattern: &str, kind: TokenKind) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("valid highlight pattern"),
            group: 0,
            kind,
        }
    }

    fn group(pattern: &str, group: usize, kind: TokenKind) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("valid highlight pattern"),
            group,
            kind,
        }
    }
}

// Generic rules reused verbatim by JS/TS, Python, Java and C#: quoted
// strings (single, double or backtick delimited, backslash escapes
// honored), bare numerals, and the capitalized-identifier type heuristic.
const STRING_PATTERN: &str = r#""(?:\\.|[^"\\])*"|'(?:\\.|[^'\\])*'|`(?:\\.|[^`\\])*`"#;
const NUMBER_PATTERN: &str = r"\b\d+(?:\.\d+)?\b";
const TYPE_PATTERN: &str = r"\b[A-Z][A-Za-z0-9_]*\b";

fn keyword_pattern(words: &[&str]) -> String {
    format!(r"\b(?:{})\b", words.join("|"))
}

/// Look up the rule list for a lowercased language tag.
///
/// CSV is absent on purpose: it is scanned manually, not by patterns.
pub fn rules_for(tag: &str) -> Option<&'static [Rule]> {
    match tag {
        "js" | "jsx" | "javascript" | "ts" | "tsx" | "typescript" => Some(JS_RULES.as_slice()),
        "bash" | "sh" | "shell" | "zsh" => Some(BASH_RULES.as_slice()),
        "php" => Some(PHP_RULES.as_slice()),
        "python" | "py" => Some(PYTHON_RULES.as_slice()),
        "java" => Some(JAVA_RULES.as_slice()),
        "c#" | "cs" | "csharp" => Some(CSHARP_RULES.as_slice()),
        "sql" | "plsql" => Some(SQL_RULES.as_slice()),
        "xml" => Some(XML_RULES.as_slice()),
        "json" => Some(JSON_RULES.as_slice()),
        "yaml" | "yml" => Some(YAML_RULES.as_slice()),
        _ => None,
    }
}

static JS_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new(
            &keyword_pattern(&[
                "function", "var", "let", "const", "if", "else", "for", "while", "do", "return",
                "new", "class", "extends", "import", "export", "from", "default", "try", "catch",
                "finally", "throw", "switch", "case", "break", "continue", "typeof", "instanceof",
                "this", "async", "await", "yield", "in", "of", "delete", "void", "static", "get",
                "set", "null", "undefined", "true", "false",
            ]),
            TokenKind::Keyword,
        ),
        Rule::new(TYPE_PATTERN, TokenKind::Type),
        Rule::new(NUMBER_PATTERN, TokenKind::Number),
        Rule::new(STRING_PATTERN, TokenKind::Str),
        Rule::new(r"(?s)//[^\n]*|/\*.*?\*/", TokenKind::Comment),
    ]
});

static BASH_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new(
            &keyword_pattern(&[
                "if", "then", "elif", "else", "fi", "for", "while", "until", "do", "done", "case",
                "esac", "function", "in", "select", "return", "exit", "local", "export",
                "readonly", "declare", "source", "echo",
            ]),
            TokenKind::Keyword,
        ),
        Rule::new(r"\$\{[^}]*\}|\$\w+", TokenKind::Tag),
        Rule::new(NUMBER_PATTERN, TokenKind::Number),
        Rule::new(STRING_PATTERN, TokenKind::Str),
        Rule::new(r"#[^\n]*", TokenKind::Comment),
    ]
});

static PHP_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new(
            &keyword_pattern(&[
                "function", "echo", "if", "else", "elseif", "foreach", "for", "while", "return",
                "class", "interface", "trait", "public", "private", "protected", "static", "new",
                "namespace", "use", "require", "require_once", "include", "include_once", "try",
                "catch", "finally", "throw", "switch", "case", "break", "continue", "as", "array",
                "isset", "unset", "empty", "null", "true", "false",
            ]),
            TokenKind::Keyword,
        ),
        Rule::new(r"\$\w+", TokenKind::Tag),
        Rule::new(TYPE_PATTERN, TokenKind::Type),
        Rule::new(NUMBER_PATTERN, TokenKind::Number),
        Rule::new(STRING_PATTERN, TokenKind::Str),
        Rule::new(r"(?s)//[^\n]*|#[^\n]*|/\*.*?\*/", TokenKind::Comment),
    ]
});

static PYTHON_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new(
            &keyword_pattern(&[
                "def", "class", "return", "if", "elif", "else", "for", "while", "in", "not",
                "and", "or", "is", "None", "True", "False", "import", "from", "as", "with",
                "try", "except", "finally", "raise", "lambda", "yield", "global", "nonlocal",
                "pass", "break", "continue", "assert", "del", "async", "await",
            ]),
            TokenKind::Keyword,
        ),
        Rule::new(TYPE_PATTERN, TokenKind::Type),
        Rule::new(NUMBER_PATTERN, TokenKind::Number),
        Rule::new(STRING_PATTERN, TokenKind::Str),
        Rule::new(r"#[^\n]*", TokenKind::Comment),
    ]
});

static JAVA_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new(
            &keyword_pattern(&[
                "public", "private", "protected", "class", "interface", "enum", "extends",
                "implements", "static", "final", "void", "int", "long", "double", "float",
                "boolean", "char", "byte", "short", "new", "return", "if", "else", "for",
                "while", "do", "switch", "case", "break", "continue", "try", "catch", "finally",
                "throw", "throws", "import", "package", "this", "super", "abstract",
                "synchronized", "volatile", "transient", "instanceof", "default", "null",
                "true", "false",
            ]),
            TokenKind::Keyword,
        ),
        Rule::new(TYPE_PATTERN, TokenKind::Type),
        Rule::new(NUMBER_PATTERN, TokenKind::Number),
        Rule::new(STRING_PATTERN, TokenKind::Str),
        Rule::new(r"(?s)//[^\n]*|/\*.*?\*/", TokenKind::Comment),
    ]
});

static CSHARP_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new(
            &keyword_pattern(&[
                "public", "private", "protected", "internal", "class", "struct", "interface",
                "enum", "namespace", "using", "static", "readonly", "const", "void", "int",
                "long", "double", "float", "decimal", "bool", "char", "string", "var", "new",
                "return", "if", "else", "for", "foreach", "while", "do", "switch", "case",
                "break", "continue", "try", "catch", "finally", "throw", "this", "base",
                "abstract", "virtual", "override", "sealed", "async", "await", "partial",
                "get", "set", "in", "out", "ref", "is", "as", "delegate", "event", "lock",
                "null", "true", "false",
            ]),
            TokenKind::Keyword,
        ),
        Rule::new(TYPE_PATTERN, TokenKind::Type),
        Rule::new(NUMBER_PATTERN, TokenKind::Number),
        Rule::new(STRING_PATTERN, TokenKind::Str),
        Rule::new(r"(?s)//[^\n]*|/\*.*?\*/", TokenKind::Comment),
    ]
});

static SQL_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        // SQL keyword matching is case-insensitive; every other language
        // matches keywords case-sensitively.
        Rule::new(
            &format!(
                "(?i){}",
                keyword_pattern(&[
                    "select", "from", "where", "insert", "into", "values", "update", "set",
                    "delete", "create", "table", "alter", "drop", "index", "view", "join",
                    "inner", "left", "right", "outer", "full", "on", "as", "and", "or", "not",
                    "null", "primary", "key", "foreign", "references", "group", "by", "order",
                    "having", "limit", "offset", "distinct", "union", "all", "exists",
                    "between", "like", "in", "is", "count", "sum", "avg", "min", "max", "case",
                    "when", "then", "else", "end", "begin", "commit", "rollback", "declare",
                    "cursor", "procedure", "function", "trigger", "loop", "return",
                ])
            ),
            TokenKind::Keyword,
        ),
        Rule::new(NUMBER_PATTERN, TokenKind::Number),
        Rule::new(r"'(?:''|[^'])*'", TokenKind::Str),
        Rule::new(r"(?s)--[^\n]*|/\*.*?\*/", TokenKind::Comment),
    ]
});

static XML_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::group(r"</?([A-Za-z_][\w.:-]*)", 1, TokenKind::Tag),
        // Attribute names are recognized by the `=` that follows them.
        Rule::group(r"\b([A-Za-z_:][\w.:-]*)\s*=", 1, TokenKind::Keyword),
        Rule::new(r#""[^"]*"|'[^']*'"#, TokenKind::Str),
        Rule::new(r"(?s)<!--.*?-->", TokenKind::Comment),
    ]
});

static JSON_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        // Keys: quoted strings immediately followed by a colon, colored as
        // keyword rather than string.
        Rule::group(r#"("(?:\\.|[^"\\])*")\s*:"#, 1, TokenKind::Keyword),
        // String values: a narrower pass than the generic string rule so
        // keys never get repainted as strings.
        Rule::group(r#":\s*("(?:\\.|[^"\\])*")"#, 1, TokenKind::Str),
        Rule::new(NUMBER_PATTERN, TokenKind::Number),
        Rule::new(r"\b(?:true|false|null)\b", TokenKind::Keyword),
    ]
});

static YAML_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        // Keys at line start, optionally behind indentation or a list dash.
        Rule::group(r"(?m)^[ \t]*(?:-[ \t]+)?([A-Za-z_][\w.-]*)[ \t]*:", 1, TokenKind::Keyword),
        Rule::group(r#":[ \t]*("[^"\n]*"|'[^'\n]*')"#, 1, TokenKind::Str),
        Rule::new(NUMBER_PATTERN, TokenKind::Number),
        Rule::new(r"#[^\n]*", TokenKind::Comment),
    ]
});

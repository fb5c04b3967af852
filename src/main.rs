//! Inklet - a terminal markdown reader with regex-driven syntax highlighting.
//!
//! # Usage
//!
//! ```bash
//! inklet README.md
//! inklet docs/
//! inklet --theme light docs/
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use inklet::ansi;
use inklet::config::{
    ConfigFlags, ThemeMode, clear_config_flags, global_config_path, load_config_flags,
    local_override_path, parse_flag_tokens, save_config_flags,
};
use inklet::document::{Block, Document};
use inklet::highlight::highlight;
use inklet::inline::render_inline;
use inklet::library;
use inklet::perf;
use inklet::styled::{Rgb, StylePatch, StyledText};

/// Inline-code background fill, dark theme.
const DARK_CODE_BG: Rgb = Rgb::new(40, 44, 52);
/// Inline-code background fill, light theme.
const LIGHT_CODE_BG: Rgb = Rgb::new(232, 234, 237);

/// A terminal markdown reader with regex-driven syntax highlighting
#[derive(Parser, Debug)]
#[command(name = "inklet", version, about, long_about = None)]
struct Cli {
    /// Markdown file or library directory to render
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Force the highlight theme (light or dark)
    #[arg(long, value_enum, default_value = "auto")]
    theme: ThemeMode,

    /// Print plain text without ANSI styling
    #[arg(long)]
    no_color: bool,

    /// Enable performance logging
    #[arg(long)]
    perf: bool,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    perf::set_enabled(effective.perf);
    let dark = effective.theme.unwrap_or(ThemeMode::Auto).is_dark();
    let color = !effective.no_color;

    if !cli.path.exists() {
        anyhow::bail!("Path not found: {}", cli.path.display());
    }

    if cli.path.is_dir() {
        let entries = library::scan(&cli.path)
            .with_context(|| format!("Failed to scan library {}", cli.path.display()))?;
        for (index, entry) in entries.iter().enumerate() {
            if index > 0 {
                println!();
            }
            let text = entry
                .read()
                .with_context(|| format!("Failed to read {}", entry.path().display()))?;
            let doc = Document::parse(entry.file_name(), &text);
            print!("{}", render_document(&doc, dark, color));
        }
    } else {
        let file_name = cli
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let text = std::fs::read_to_string(&cli.path)
            .with_context(|| format!("Failed to read {}", cli.path.display()))?;
        let doc = Document::parse(&file_name, &text);
        print!("{}", render_document(&doc, dark, color));
    }

    Ok(())
}

/// Render one document to a printable string.
fn render_document(doc: &Document, dark: bool, color: bool) -> String {
    let _scope = perf::scope("main.render_document");
    let code_bg = if dark { DARK_CODE_BG } else { LIGHT_CODE_BG };
    let mut out = String::new();

    let mut title = StyledText::new();
    title.push_styled(
        doc.title(),
        StylePatch::default().with_bold().with_underline(),
    );
    out.push_str(&emit(&title, color));
    out.push_str("\n\n");

    for block in doc.blocks() {
        match block {
            Block::Paragraph(text) => {
                out.push_str(&emit(&render_inline(text, code_bg), color));
                out.push_str("\n\n");
            }
            Block::Subheading { text, level } => {
                let mut heading = StyledText::new();
                heading.push_plain(&"#".repeat(usize::from(*level)));
                heading.push_plain(" ");
                heading.push_styled(text, StylePatch::default().with_bold());
                out.push_str(&emit(&heading, color));
                out.push_str("\n\n");
            }
            Block::BulletList(items) => {
                for item in items {
                    out.push_str("  • ");
                    out.push_str(&emit(&render_inline(item, code_bg), color));
                    out.push('\n');
                }
            }
            Block::CodeBlock { code, language } => {
                out.push_str(&emit(&highlight(code, language.as_deref(), dark), color));
                out.push_str("\n\n");
            }
            // Reserved variant, never produced by the parser.
            Block::Table { .. } => {}
        }
    }

    out
}

fn emit(styled: &StyledText, color: bool) -> String {
    if color {
        ansi::render(styled)
    } else {
        styled.text().to_string()
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Auto,
    Light,
    Dark,
}

impl ThemeMode {
    /// Resolve to "is dark theme active". `Auto` consults `COLORFGBG` and
    /// defaults to dark when the terminal gives no answer.
    pub fn is_dark(self) -> bool {
        match self {
            Self::Dark => true,
            Self::Light => false,
            Self::Auto => dark_from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref()),
        }
    }
}

/// Guess the background from the `COLORFGBG` convention ("fg;bg" with
/// 0-15 palette indices). Index 7 and above is treated as light.
pub fn dark_from_colorfgbg(colorfgbg: Option<&str>) -> bool {
    let Some(value) = colorfgbg else {
        return true;
    };
    let bg_str = value.rsplit(';').next().unwrap_or(value);
    let Ok(bg) = bg_str.parse::<u8>() else {
        return true;
    };
    bg < 7
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub no_color: bool,
    pub perf: bool,
    pub theme: Option<ThemeMode>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            no_color: self.no_color || other.no_color,
            perf: self.perf || other.perf,
            theme: other.theme.or(self.theme),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("inklet").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("inklet")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("inklet").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("inklet").join("config");
        }
    }

    PathBuf::from(".inkletrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".inkletrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# inklet defaults (saved with --save)".to_string());
    if flags.no_color {
        lines.push("--no-color".to_string());
    }
    if flags.perf {
        lines.push("--perf".to_string());
    }
    if let Some(theme) = flags.theme {
        let theme_str = match theme {
            ThemeMode::Auto => "auto",
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        };
        lines.push(format!("--theme {theme_str}"));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--no-color" {
            flags.no_color = true;
        } else if token == "--perf" {
            flags.perf = true;
        } else if token == "--theme" {
            if let Some(next) = tokens.get(i + 1) {
                flags.theme = parse_theme(next);
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--theme=") {
            flags.theme = parse_theme(value);
        }
        i += 1;
    }
    flags
}

fn parse_theme(s: &str) -> Option<ThemeMode> {
    match s {
        "auto" => Some(ThemeMode::Auto),
        "light" => Some(ThemeMode::Light),
        "dark" => Some(ThemeMode::Dark),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_flag_tokens_extracts_known_flags() {
        let args = vec![
            "inklet".to_string(),
            "--no-color".to_string(),
            "--perf".to_string(),
            "--theme".to_string(),
            "dark".to_string(),
            "docs".to_string(),
        ];
        let flags = parse_flag_tokens(&args);
        assert!(flags.no_color);
        assert!(flags.perf);
        assert_eq!(flags.theme, Some(ThemeMode::Dark));
    }

    #[test]
    fn test_parse_theme_equals_form() {
        let args = vec!["--theme=light".to_string()];
        let flags = parse_flag_tokens(&args);
        assert_eq!(flags.theme, Some(ThemeMode::Light));
    }

    #[test]
    fn test_config_union_merges_cli_over_file_for_options() {
        let file = ConfigFlags {
            no_color: true,
            theme: Some(ThemeMode::Light),
            ..ConfigFlags::default()
        };
        let cli = ConfigFlags {
            perf: true,
            theme: Some(ThemeMode::Dark),
            ..ConfigFlags::default()
        };
        let merged = file.union(&cli);
        assert!(merged.no_color);
        assert!(merged.perf);
        assert_eq!(merged.theme, Some(ThemeMode::Dark));
    }

    #[test]
    fn test_save_load_and_clear_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".inkletrc");
        let flags = ConfigFlags {
            no_color: true,
            perf: true,
            theme: Some(ThemeMode::Dark),
        };

        save_config_flags(&path, &flags).unwrap();
        let loaded = load_config_flags(&path).unwrap();
        assert_eq!(loaded, flags);

        clear_config_flags(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_colorfgbg_dark_background() {
        assert!(dark_from_colorfgbg(Some("15;0")));
    }

    #[test]
    fn test_colorfgbg_light_background() {
        assert!(!dark_from_colorfgbg(Some("0;15")));
    }

    #[test]
    fn test_colorfgbg_absent_defaults_to_dark() {
        assert!(dark_from_colorfgbg(None));
        assert!(dark_from_colorfgbg(Some("garbage")));
    }
}

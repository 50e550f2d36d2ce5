use std::fs;
use std::path::PathBuf;

use ratatui::style::Color;

use super::parsing::{parse_color_value, strip_inline_comment};
use super::paths::{config_dir, resolve_conf_path};

/// Skeleton configuration file content written on first run.
pub(crate) const SKELETON_CONF_CONTENT: &str = "# skinner configuration\n\
#\n\
# Format: key = value\n\
# Lines starting with # or // are comments.\n\
#\n\
# Directory scanned for packages providing *.skins files. Target settings\n\
# files live under <packages_dir>/User/<Target>.settings.\n\
# packages_dir = ~/.config/skinner/packages\n\
\n\
# Selector palette\n\
# Value formats: #RRGGBB (hex) or R,G,B (decimal, 0-255 each)\n\
text = #cdd6f4\n\
dim_text = #a6adc8\n\
accent = #74c7ec\n\
highlight_bg = #45475a\n\
border = #7f849c\n";

/// Color palette used by the selector UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Primary text color for list rows and the filter line.
    pub text: Color,
    /// Dimmed text for package descriptions and hints.
    pub dim_text: Color,
    /// Accent color for the active-skin marker and matched rows.
    pub accent: Color,
    /// Background of the highlighted list row.
    pub highlight_bg: Color,
    /// Border color for panes.
    pub border: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            dim_text: Color::Rgb(0xa6, 0xad, 0xc8),
            accent: Color::Rgb(0x74, 0xc7, 0xec),
            highlight_bg: Color::Rgb(0x45, 0x47, 0x5a),
            border: Color::Rgb(0x7f, 0x84, 0x9c),
        }
    }
}

/// User-tunable settings read from `skinner.conf`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Packages tree override; `None` falls back to the default location.
    pub packages_dir: Option<PathBuf>,
    /// Selector palette, defaulting per [`Palette::default`].
    pub palette: Palette,
}

/// What: Parse `skinner.conf` content into [`Settings`].
///
/// Inputs:
/// - `content`: Raw configuration text, one `key = value` per line.
///
/// Output:
/// - Parsed settings; unknown keys and malformed values are ignored.
///
/// Details:
/// - Keys are normalized to lowercase with `.`/`-`/space folded to `_`.
/// - A `~/` prefix in `packages_dir` expands against `$HOME`.
#[must_use]
pub fn parse_settings(content: &str) -> Settings {
    let mut out = Settings::default();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        if !trimmed.contains('=') {
            continue;
        }
        let mut parts = trimmed.splitn(2, '=');
        let raw_key = parts.next().unwrap_or("");
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val_raw = parts.next().unwrap_or("").trim();
        match key.as_str() {
            "packages_dir" => {
                let val = strip_inline_comment(val_raw);
                if !val.is_empty() {
                    out.packages_dir = Some(expand_home(val));
                }
            }
            "text" => {
                if let Some(c) = parse_color_value(val_raw) {
                    out.palette.text = c;
                }
            }
            "dim_text" => {
                if let Some(c) = parse_color_value(val_raw) {
                    out.palette.dim_text = c;
                }
            }
            "accent" => {
                if let Some(c) = parse_color_value(val_raw) {
                    out.palette.accent = c;
                }
            }
            "highlight_bg" => {
                if let Some(c) = parse_color_value(val_raw) {
                    out.palette.highlight_bg = c;
                }
            }
            "border" => {
                if let Some(c) = parse_color_value(val_raw) {
                    out.palette.border = c;
                }
            }
            _ => {}
        }
    }
    out
}

/// Expand a leading `~/` against `$HOME`; other values pass through.
fn expand_home(val: &str) -> PathBuf {
    if let Some(rest) = val.strip_prefix("~/")
        && let Ok(home) = std::env::var("HOME")
    {
        return PathBuf::from(home).join(rest);
    }
    PathBuf::from(val)
}

/// Load user settings from `skinner.conf`, writing a commented skeleton on
/// first run. Falls back to `Settings::default()` when missing or invalid.
pub fn settings() -> Settings {
    let path = resolve_conf_path().unwrap_or_else(|| {
        let target = config_dir().join("skinner.conf");
        if !target.is_file() {
            let _ = fs::write(&target, SKELETON_CONF_CONTENT);
        }
        target
    });
    let Ok(content) = fs::read_to_string(&path) else {
        return Settings::default();
    };
    parse_settings(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Parse a conf body covering all recognized keys.
    ///
    /// Inputs:
    /// - Conf text with comments, a packages_dir, and palette overrides.
    ///
    /// Output:
    /// - All fields populated; unknown keys ignored.
    fn parse_settings_full_conf() {
        let conf = "\
# comment\n\
packages_dir = /tmp/pkgs // inline note\n\
text = #ffffff\n\
dim_text = 1,2,3\n\
unknown_key = whatever\n";
        let s = parse_settings(conf);
        assert_eq!(s.packages_dir.as_deref(), Some(std::path::Path::new("/tmp/pkgs")));
        assert_eq!(s.palette.text, Color::Rgb(0xff, 0xff, 0xff));
        assert_eq!(s.palette.dim_text, Color::Rgb(1, 2, 3));
        // untouched keys keep defaults
        assert_eq!(s.palette.accent, Palette::default().accent);
    }

    #[test]
    fn parse_settings_empty_and_garbage_lines() {
        let s = parse_settings("\n\nnot a kv line\n= no key\n");
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn skeleton_conf_parses_to_defaults() {
        let s = parse_settings(SKELETON_CONF_CONTENT);
        assert_eq!(s.packages_dir, None);
        assert_eq!(s.palette, Palette::default());
    }
}

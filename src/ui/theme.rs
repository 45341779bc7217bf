//! Theme management and ANSI escape sequence generation.
//!
//! Palettes are TOML documents. Two are built in, one for each side of the
//! dark-mode toggle:
//!
//! - `catppuccin-mocha`: dark palette (default dark slot)
//! - `catppuccin-latte`: light palette (default light slot)
//!
//! A custom palette file replaces the dark slot.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cba6f7"
//! accent = "#89b4fa"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#cba6f7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! form_border = "#94e2d5"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! error_fg = "#f38ba8"
//! archive_fg = "#a6adc8"
//! ```

use crate::domain::{BlogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the built-in dark palette.
pub const DEFAULT_DARK_THEME: &str = "catppuccin-mocha";

/// Name of the built-in light palette.
pub const DEFAULT_LIGHT_THEME: &str = "catppuccin-latte";

/// A named color palette.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex color strings (e.g. `"#cdd6f4"`) for every UI element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Blog title and column headings.
    pub header_fg: String,
    /// Optional header background.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Post titles.
    pub accent: String,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, counters, secondary text.
    pub text_dim: String,

    pub border: String,
    pub search_bar_border: String,
    pub form_border: String,

    /// Search match highlight.
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,
    /// Form validation messages.
    pub error_fg: String,
    /// Archive entries.
    pub archive_fg: String,
}

impl Theme {
    /// Loads a built-in palette by name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use atomic_blog::ui::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        Self::from_toml(toml_str).ok()
    }

    /// Parses a palette from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`BlogError::Theme`] on invalid syntax or missing colors.
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| BlogError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Loads a palette from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`BlogError::Io`] if the file cannot be read and
    /// [`BlogError::Theme`] if its contents do not parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Converts a hex color to an RGB tuple; malformed input yields white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground escape sequence for `hex`.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape sequence for `hex`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the built-in dark palette.
    ///
    /// # Panics
    ///
    /// Panics if the embedded palette fails to parse, which the theme tests
    /// rule out.
    fn default() -> Self {
        Self::from_name(DEFAULT_DARK_THEME).expect("Built-in catppuccin-mocha theme should always parse")
    }
}

/// The two palettes the dark-mode toggle switches between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSet {
    pub dark: Theme,
    pub light: Theme,
}

impl ThemeSet {
    /// Palette for the given mode.
    #[must_use]
    pub const fn active(&self, dark_mode: bool) -> &Theme {
        if dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }
}

impl Default for ThemeSet {
    /// # Panics
    ///
    /// Panics if the embedded light palette fails to parse.
    fn default() -> Self {
        Self {
            dark: Theme::default(),
            light: Theme::from_name(DEFAULT_LIGHT_THEME)
                .expect("Built-in catppuccin-latte theme should always parse"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_palettes_parse() {
        let themes = ThemeSet::default();
        assert_eq!(themes.dark.name, DEFAULT_DARK_THEME);
        assert_eq!(themes.light.name, DEFAULT_LIGHT_THEME);
        assert!(themes.light.colors.header_bg.is_some());
        assert!(themes.dark.colors.header_bg.is_none());
    }

    #[test]
    fn active_follows_dark_mode() {
        let themes = ThemeSet::default();
        assert_eq!(themes.active(true).name, DEFAULT_DARK_THEME);
        assert_eq!(themes.active(false).name, DEFAULT_LIGHT_THEME);
    }

    #[test]
    fn hex_colors_become_truecolor_escapes() {
        assert_eq!(Theme::fg("#ff8000"), "\u{1b}[38;2;255;128;0m");
        assert_eq!(Theme::bg("000000"), "\u{1b}[48;2;0;0;0m");
    }

    #[test]
    fn malformed_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("#abc"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::fg("#zz0000"), "\u{1b}[38;2;255;0;0m");
    }

    #[test]
    fn from_file_reads_custom_palette() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        let custom = include_str!("../../themes/catppuccin-mocha.toml").replace("catppuccin-mocha", "custom");
        file.write_all(custom.as_bytes()).expect("write palette");

        let theme = Theme::from_file(file.path()).expect("palette parses");
        assert_eq!(theme.name, "custom");
    }

    #[test]
    fn from_file_reports_missing_file_as_io() {
        let err = Theme::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, BlogError::Io(_)));
    }

    #[test]
    fn incomplete_palette_is_a_theme_error() {
        let err = Theme::from_toml("name = \"half\"\n[colors]\nheader_fg = \"#ffffff\"\n").unwrap_err();
        assert!(matches!(err, BlogError::Theme(_)));
    }
}

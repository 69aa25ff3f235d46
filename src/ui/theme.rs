//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system for the plugin, supporting both
//! built-in themes and custom themes loaded from TOML files. It provides
//! utilities for converting hex colors to ANSI escape sequences.
//!
//! # Built-in Themes
//!
//! - `darcula`: Dark theme (default)
//! - `intellij-light`: Light theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#dfe1e5"
//! selection_fg = "#ffffff"
//! selection_bg = "#2e436e"
//! text_normal = "#dfe1e5"
//! text_dim = "#868a91"
//! border = "#393b40"
//! search_bar_border = "#3574f0"
//! match_highlight_fg = "#1e1f22"
//! match_highlight_bg = "#e8b14a"
//! empty_state_fg = "#548af7"
//! error_fg = "#f75464"
//! badge_fg = "#ffffff"
//! badge_bg = "#3574f0"
//! pill_fg = "#000000"
//! pill_bg = "#d3d3d3"
//! pill_selected_fg = "#ffffff"
//! pill_selected_bg = "#121314"
//! pill_focus_fg = "#3574f0"
//! ```
//!
//! # Example
//!
//! ```rust
//! use jetcatalog::ui::theme::Theme;
//!
//! let theme = Theme::from_name("darcula").unwrap();
//! println!("{}", Theme::fg(&theme.colors.header_fg));
//! println!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! ```

use crate::domain::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "darcula";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are specified as hex strings (e.g., "#dfe1e5").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected row foreground color.
    pub selection_fg: String,
    /// Selected row background color.
    pub selection_bg: String,

    /// Normal text color (titles).
    pub text_normal: String,
    /// Dimmed text color (footer, subtitles).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Search bar border color.
    pub search_bar_border: String,
    /// Fuzzy match highlight foreground.
    pub match_highlight_fg: String,
    /// Fuzzy match highlight background.
    pub match_highlight_bg: String,

    /// Empty state and loading message color.
    pub empty_state_fg: String,
    /// Load error message color.
    pub error_fg: String,

    /// Row badge text color.
    pub badge_fg: String,
    /// Row badge background color.
    pub badge_bg: String,

    /// Unselected category pill text.
    pub pill_fg: String,
    /// Unselected category pill background.
    pub pill_bg: String,
    /// Selected category pill text.
    pub pill_selected_fg: String,
    /// Selected category pill background.
    pub pill_selected_bg: String,
    /// Marker color for the pill under the category cursor.
    pub pill_focus_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `darcula`, `intellij-light`. Returns `None` for
    /// anything else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "darcula" => include_str!("../../themes/darcula.toml"),
            "intellij-light" => include_str!("../../themes/intellij-light.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Theme`] if the file cannot be read or its TOML
    /// content cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| CatalogError::Theme(format!("Failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| CatalogError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Resolves the configured theme: `theme_file` first, then `theme_name`,
    /// then the default. Failures are logged and fall through to the default.
    #[must_use]
    pub fn resolve(theme_name: Option<&str>, theme_file: Option<&Path>) -> Self {
        if let Some(file) = theme_file {
            match Self::from_file(file) {
                Ok(theme) => return theme,
                Err(e) => {
                    tracing::debug!(theme_file = %file.display(), error = %e, "failed to load theme from file, using default");
                    return Self::default();
                }
            }
        }

        theme_name.map_or_else(Self::default, |name| {
            Self::from_name(name).unwrap_or_else(|| {
                tracing::debug!(theme_name = %name, "unknown theme, using default");
                Self::default()
            })
        })
    }

    /// Converts a hex color to RGB tuple.
    ///
    /// Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use jetcatalog::ui::theme::Theme;
    ///
    /// assert_eq!(Theme::fg("#3574f0"), "\u{1b}[38;2;53;116;240m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence (`\x1b[1m`).
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence (`\x1b[2m`).
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence (`\x1b[0m`).
    ///
    /// Clears all styling (colors, bold, dim, etc.).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (Darcula).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("Built-in darcula theme should always parse")
    }
}

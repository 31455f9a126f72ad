//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the day/night color scheme system. The two built-in
//! palettes are embedded TOML documents and are exact mirrors of each other:
//! the `ink` and `paper` values (the two palette variables the theme toggle
//! swaps) hold the dark and light anchors, and every frame is painted as ink
//! on paper. Custom palettes can be loaded from a TOML file.
//!
//! # TOML Format
//!
//! ```toml
//! name = "day"
//!
//! [colors]
//! ink = "#0a0a14"
//! paper = "#ffffff"
//! text_dim = "#6b6b76"
//! border = "#c9c9d1"
//! accent = "#4646a8"
//! match_highlight_fg = "#0a0a14"
//! match_highlight_bg = "#f5e6a8"
//! empty_state_fg = "#4646a8"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{BookrackError, Result};

/// The two selectable color schemes.
///
/// Day renders dark ink on light paper; night renders the same two values
/// swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Dark-on-light palette (the fallback when no preference is known).
    #[default]
    Day,
    /// Light-on-dark palette.
    Night,
}

impl ThemeMode {
    /// The settings-form value for this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }

    /// Parses a settings-form or CLI value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "day" => Some(Self::Day),
            "night" => Some(Self::Night),
            _ => None,
        }
    }

    /// Derives the startup mode from a `COLORFGBG` environment value.
    ///
    /// The convention encodes the terminal background color as the last
    /// semicolon-separated field; the low dark indexes (0-6 and 8) indicate
    /// a dark background. Absent or malformed values fall back to day.
    #[must_use]
    pub fn from_colorfgbg(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Self::Day;
        };
        let Some(background) = value.rsplit(';').next() else {
            return Self::Day;
        };
        match background.parse::<u8>() {
            Ok(index) if index <= 6 || index == 8 => Self::Night,
            _ => Self::Day,
        }
    }

    /// Queries the ambient preference once from the process environment.
    ///
    /// This is a one-shot read at startup; the mode is never re-derived
    /// while running.
    #[must_use]
    pub fn detect_ambient() -> Self {
        Self::from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
    }
}

/// Color scheme for UI rendering.
///
/// Loaded from the built-in day/night documents or a custom TOML file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are hex strings (e.g. `"#0a0a14"`). `ink` and `paper` are the
/// swapped pair; the remaining fields tune individual components per palette.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Foreground text color; the dark anchor in day mode.
    pub ink: String,
    /// Frame background color; the light anchor in day mode.
    pub paper: String,

    /// Dimmed text color (footer, secondary info).
    pub text_dim: String,
    /// Border and separator line color.
    pub border: String,
    /// Accent color (enabled load-more, focused form field, overlay border).
    pub accent: String,

    /// Title match highlight foreground.
    pub match_highlight_fg: String,
    /// Title match highlight background.
    pub match_highlight_bg: String,

    /// Empty-result message color.
    pub empty_state_fg: String,
}

impl Theme {
    /// Loads the built-in palette for a mode.
    ///
    /// # Panics
    ///
    /// Panics if the bundled palette fails to parse, which would be a defect
    /// in the shipped asset rather than a runtime condition.
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        let toml_str = match mode {
            ThemeMode::Day => include_str!("../../themes/day.toml"),
            ThemeMode::Night => include_str!("../../themes/night.toml"),
        };
        toml::from_str(toml_str).expect("built-in theme should always parse")
    }

    /// Loads a custom palette from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`BookrackError::Theme`] when the file cannot be read or the
    /// TOML cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| BookrackError::Theme(format!("failed to read theme file: {e}")))?;
        toml::from_str(&contents)
            .map_err(|e| BookrackError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Strips a `#` prefix if present and falls back to white on malformed
    /// input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground escape sequence for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape sequence for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// ANSI bold escape sequence.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// ANSI dim escape sequence.
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// ANSI reset escape sequence, clearing all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// The day palette, matching the unknown-preference fallback.
    fn default() -> Self {
        Self::for_mode(ThemeMode::Day)
    }
}

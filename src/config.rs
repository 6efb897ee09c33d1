//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Terminal widget options are loaded from an embedded TOML asset.

use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// xterm.js options (theme, cursor, font) applied when the widget is created.
pub const TERMINAL_OPTIONS_TOML: &str = include_str!("../assets/terminal.toml");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the banner.
pub const APP_NAME: &str = "codenav";

/// Repository printed by the `source` command.
pub const SOURCE_URL: &str = "https://github.com/naiheyoung/nh-code-nav";

// =============================================================================
// Terminal Configuration
// =============================================================================

/// Glyph printed at the start of every prompt.
pub const PROMPT_UNIT: &str = "$";

/// Column width reserved for the command names in `help` output.
pub const HELP_NAME_WIDTH: usize = 16;

/// Width hint passed with inline images.
pub const IMAGE_WIDTH_HINT: &str = "50%";

/// Pixel size of one terminal cell, used to derive the grid from the viewport.
pub mod cell {
    pub const WIDTH_PX: f64 = 10.0;
    pub const HEIGHT_PX: f64 = 20.0;
}

/// Delay before a window resize is applied to the terminal grid.
pub const RESIZE_DEBOUNCE_MS: f64 = 100.0;

// =============================================================================
// Network Configuration
// =============================================================================

/// Prefix for CORS-proxied requests; the target URL is appended URI-encoded.
pub const CORS_PROXY: &str = "https://corsproxy.io/?url=";

/// Image fetch timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: u32 = 10_000;

// =============================================================================
// Terminal Widget Options
// =============================================================================

/// Colors handed to the terminal widget.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    pub foreground: String,
    pub background: String,
    pub cursor: String,
    pub selection_background: String,
    pub selection_foreground: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            foreground: "#ffffff".to_string(),
            background: "#141414".to_string(),
            cursor: "#646cff".to_string(),
            selection_background: "#ffffff".to_string(),
            selection_foreground: "#141414".to_string(),
        }
    }
}

/// Options passed to the terminal widget constructor.
///
/// Field names serialize to the widget's camelCase option keys.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TerminalOptions {
    pub theme: Theme,
    pub cursor_blink: bool,
    pub cursor_style: String,
    pub cursor_width: u32,
    pub cursor_inactive_style: String,
    pub disable_stdin: bool,
    pub font_family: String,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            cursor_blink: true,
            cursor_style: "underline".to_string(),
            cursor_width: 3,
            cursor_inactive_style: "bar".to_string(),
            disable_stdin: false,
            font_family: "JetBrains Mono".to_string(),
        }
    }
}

impl TerminalOptions {
    /// Parse options from TOML. Missing keys fall back to defaults.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load the embedded options, falling back to defaults on a bad asset.
    pub fn load() -> Self {
        Self::from_toml(TERMINAL_OPTIONS_TOML).unwrap_or_else(|e| {
            log::warn!("using default terminal options: {e}");
            Self::default()
        })
    }
}

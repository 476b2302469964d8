//! # Output Configuration
//!
//! Controls how the CLI decorates its status lines: emoji markers when the
//! terminal supports color, bracketed plain-text markers otherwise. The
//! composed document itself is never decorated.
//!
//! ## Respecting User Preferences
//!
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mdcompose::output::{OutputConfig, Marker};
//!
//! let out = OutputConfig::from_env_and_flag("auto");
//! println!("{} Wrote CLAUDE.md", out.marker(Marker::Ok));
//! ```

use std::env;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

/// Status markers used by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Ok,
    Error,
    Warn,
    Scan,
    Info,
}

impl Marker {
    fn emoji(self) -> &'static str {
        match self {
            Marker::Ok => "✅",
            Marker::Error => "❌",
            Marker::Warn => "⚠️",
            Marker::Scan => "🔍",
            Marker::Info => "📋",
        }
    }

    fn plain(self) -> &'static str {
        match self {
            Marker::Ok => "[OK]",
            Marker::Error => "[ERR]",
            Marker::Warn => "[WARN]",
            Marker::Scan => "[SCAN]",
            Marker::Info => "[INFO]",
        }
    }
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// - `always`: force colors on (overrides `NO_COLOR`)
    /// - `never`: force colors off
    /// - anything else: detect from the environment
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        // The presence of NO_COLOR (even if empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// The marker text for this configuration.
    pub fn marker(&self, marker: Marker) -> &'static str {
        if self.use_color {
            marker.emoji()
        } else {
            marker.plain()
        }
    }

    #[cfg(test)]
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    #[cfg(test)]
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

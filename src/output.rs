//! # Terminal Output
//!
//! Controls how the CLI decorates its messages. Colors and emoji are used
//! only when the terminal and the user allow it:
//!
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals
//!
//! ```rust,ignore
//! use hmerge::output::OutputConfig;
//!
//! let out = OutputConfig::from_env_and_flag("auto");
//! println!("{}", out.success("Merged 3 files"));
//! ```

use std::env;

use console::style;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// `always` forces colors on (overriding `NO_COLOR`), `never` forces them
    /// off, anything else detects support from the environment.
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

    /// Pick the emoji or its plain-text alternative.
    pub fn emoji<'a>(&self, emoji: &'a str, plain: &'a str) -> &'a str {
        if self.use_color {
            emoji
        } else {
            plain
        }
    }

    /// Format a success line
    pub fn success(&self, message: &str) -> String {
        let mark = self.emoji("✅", "[OK]");
        if self.use_color {
            format!("{} {}", mark, style(message).green())
        } else {
            format!("{} {}", mark, message)
        }
    }

    /// Format a section heading
    pub fn heading(&self, message: &str) -> String {
        if self.use_color {
            style(message).bold().to_string()
        } else {
            message.to_string()
        }
    }

    /// Dim secondary details such as external includes
    pub fn dim(&self, message: &str) -> String {
        if self.use_color {
            style(message).dim().to_string()
        } else {
            message.to_string()
        }
    }

    /// Create a configuration with colors always enabled.
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    /// Create a configuration with colors always disabled.
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

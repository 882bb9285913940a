//! Configuration constants and the resolved console settings
//!
//! Nothing here is persisted; every setting comes from the command line or
//! the environment at startup.

use crossterm::style::Color;
use std::time::Duration;

/// Environment variable naming a log file (same as `--log-file`)
pub const LOG_FILE_ENV_VAR: &str = "REQLINE_LOG_FILE";

/// Environment variable holding the tracing filter directive
pub const LOG_LEVEL_ENV_VAR: &str = "REQLINE_LOG_LEVEL";

/// Filter used when `REQLINE_LOG_LEVEL` is unset
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Display width of the method field
pub const METHOD_REGION_WIDTH: u16 = 10;

/// Character limit of the method and URL fields
pub const SINGLE_LINE_CHAR_LIMIT: usize = 280;

/// Visible rows of the body field
pub const BODY_REGION_HEIGHT: u16 = 6;

/// Minimum visible rows of the response field; it grows to fill the screen
pub const MIN_RESPONSE_REGION_HEIGHT: u16 = 3;

/// Accent colour used when `--accent` is not given
pub const DEFAULT_ACCENT: Color = Color::Magenta;

/// How a completed HTTP exchange is classified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum StatusPolicy {
    /// Every completed exchange is a success; the body is shown as is
    #[default]
    Raw,
    /// Only 2xx is a success; other statuses are shown with their status line
    Classify,
}

/// Static styling handed to the region set at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Colour of the response text and the focused region's label
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: DEFAULT_ACCENT,
        }
    }
}

/// Settings resolved from the command line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsoleConfig {
    pub status_policy: StatusPolicy,
    pub timeout: Option<Duration>,
    pub theme: Theme,
}

/// Log file path from the command line, falling back to `REQLINE_LOG_FILE`,
/// with `~` expanded
pub fn resolve_log_file(cli_value: Option<&str>) -> Option<String> {
    cli_value
        .map(str::to_string)
        .or_else(|| {
            std::env::var_os(LOG_FILE_ENV_VAR).and_then(|val| val.into_string().ok())
        })
        .filter(|path| !path.trim().is_empty())
        .map(|path| shellexpand::tilde(&path).to_string())
}

/// Tracing filter directive from `REQLINE_LOG_LEVEL`
pub fn log_level() -> String {
    std::env::var_os(LOG_LEVEL_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}

use std::ffi::OsString;
use std::time::Duration;

use crate::config::{ConsoleConfig, StatusPolicy, Theme, DEFAULT_ACCENT};
pub use clap::Parser;
use crossterm::style::Color;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// How completed exchanges are reported. `raw` shows every body as is;
    /// `classify` prefixes non-2xx bodies with their status line.
    #[clap(long, value_enum, default_value_t = StatusPolicy::Raw, help = "status policy")]
    status_policy: StatusPolicy,

    /// Request timeout in seconds. Requests never time out when omitted.
    #[clap(short = 't', long, value_name = "SECONDS", help = "request timeout")]
    timeout: Option<u64>,

    /// Accent colour for the focused label and the response text, by name
    /// (e.g. `magenta`, `dark_cyan`).
    #[clap(long, value_name = "COLOR", value_parser = parse_color, help = "accent colour")]
    accent: Option<Color>,

    /// Write logs to this file. Falls back to `REQLINE_LOG_FILE`.
    #[clap(long, value_name = "PATH", help = "log file")]
    log_file: Option<String>,
}

fn parse_color(value: &str) -> Result<Color, String> {
    Color::try_from(value).map_err(|_| format!("unknown colour '{value}'"))
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    status_policy: StatusPolicy,
    timeout: Option<u64>,
    accent: Option<Color>,
    log_file: Option<String>,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        Self::from_clap(ClapArgs::parse())
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from_clap(ClapArgs::parse_from(itr))
    }

    fn from_clap(args: ClapArgs) -> Self {
        Self {
            status_policy: args.status_policy,
            timeout: args.timeout,
            accent: args.accent,
            log_file: args.log_file,
        }
    }

    pub fn status_policy(&self) -> StatusPolicy {
        self.status_policy
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    pub fn accent(&self) -> Color {
        self.accent.unwrap_or(DEFAULT_ACCENT)
    }

    pub fn log_file(&self) -> Option<&str> {
        self.log_file.as_deref()
    }

    /// Settings handed to the controller
    pub fn to_config(&self) -> ConsoleConfig {
        ConsoleConfig {
            status_policy: self.status_policy(),
            timeout: self.timeout(),
            theme: Theme {
                accent: self.accent(),
            },
        }
    }
}

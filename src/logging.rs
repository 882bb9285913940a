//! # Logging
//!
//! File-only tracing setup. The console owns the terminal, so logs never go
//! to stdout or stderr; without a log file nothing is installed.

use anyhow::{anyhow, Context, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

/// Crates whose logs are capped at warn regardless of the requested level
const QUIET_TARGETS: &[&str] = &["reqwest", "hyper", "hyper_util", "rustls", "tokio", "mio"];

/// Filter for `level`, with noisy dependencies quietened
pub fn build_filter(level: &str) -> Result<EnvFilter> {
    let mut filter = EnvFilter::try_new(level)
        .with_context(|| format!("Invalid log level '{level}'"))?;
    for target in QUIET_TARGETS {
        filter = filter.add_directive(format!("{target}=warn").parse()?);
    }
    Ok(filter)
}

/// Install a global subscriber appending to `path`
pub fn init_file_logging(path: &str, level: &str) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file '{path}'"))?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(level)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_timer(ChronoLocal::rfc_3339())
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {e}"))?;

    tracing::info!("Logging to {} at level {}", path, level);
    Ok(())
}

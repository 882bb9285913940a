//! # reqline Main Entry Point

use anyhow::{bail, Result};
use reqline::cmd_args::CommandLineArgs;
use reqline::{config, logging, AppController};

fn main() -> Result<()> {
    let cmd_args = CommandLineArgs::parse();

    if let Some(path) = config::resolve_log_file(cmd_args.log_file()) {
        logging::init_file_logging(&path, &config::log_level())?;
    }

    if !atty::is(atty::Stream::Stdout) {
        bail!("reqline needs an interactive terminal: stdout is not a TTY");
    }

    let config = cmd_args.to_config();
    tracing::info!("Starting with {:?}", config);

    let mut app = AppController::new(&config)?;
    app.run_blocking()
}

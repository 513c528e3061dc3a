//! studio - BMAD Studio sidecar connection monitor
//!
//! Replays sidecar lifecycle events through the same tracker the UI uses,
//! for previewing connection states without the desktop host.
//!
//! # Examples
//!
//! ```bash
//! # Replay a recorded event log
//! studio watch --input events.ndjson --indicator
//!
//! # Pipe events from another process
//! echo '{"event":"sidecar-ready","payload":{"port":4000}}' | studio watch
//!
//! # Show the resolved configuration
//! studio check-config
//! ```

use studio_cli::cli::Cli;
use studio_cli::commands::execute;
use studio_cli::{CliResult, logger};
use studio_config::Config;

use std::process::ExitCode;

use clap::Parser;
use log::error;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let config = match cli.config_dir {
        Some(ref dir) => Config::load_from(dir)?,
        None => Config::load()?,
    };
    config.validate()?;

    logger::initialize(&config.logging)?;
    config.log_summary();

    let stdout = std::io::stdout();
    let mut output = stdout.lock();
    execute(cli.command, &config, &mut output)
}

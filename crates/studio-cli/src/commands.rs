use crate::{CliError, CliResult, WatchOptions, run_watch};

use studio_config::Config;
use studio_sidecar::{ChannelNames, SidecarChannel};

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::panic::Location;
use std::path::PathBuf;

use clap::Subcommand;
use error_location::ErrorLocation;
use serde_json::{Map, Value};

#[derive(Subcommand)]
pub enum Commands {
    /// Replay sidecar events (one JSON object per line) and print each state change
    Watch {
        /// Read events from a file instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,

        /// Print the status indicator shown in the UI instead of the raw state
        #[arg(long)]
        indicator: bool,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Validate the configuration and print the resolved event names
    CheckConfig,
}

pub fn execute<W: Write>(command: Commands, config: &Config, output: &mut W) -> CliResult<()> {
    match command {
        Commands::Watch {
            input,
            indicator,
            pretty,
        } => {
            let options = WatchOptions { indicator, pretty };
            let reader: Box<dyn BufRead> = match input {
                Some(path) => {
                    let file = File::open(&path).map_err(|e| CliError::Open {
                        path: path.clone(),
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    })?;
                    Box::new(BufReader::new(file))
                }
                None => Box::new(std::io::stdin().lock()),
            };
            run_watch(reader, output, &config.bridge, options)?;
            Ok(())
        }
        Commands::CheckConfig => {
            let names = ChannelNames::from(&config.bridge);
            let events: Map<String, Value> = SidecarChannel::ALL
                .into_iter()
                .map(|channel| (channel.to_string(), Value::from(names.name(channel))))
                .collect();
            let report = serde_json::json!({
                "bridge_enabled": config.bridge.enabled,
                "events": events,
                "log_level": config.logging.level.to_string(),
            });
            writeln!(output, "{}", serde_json::to_string_pretty(&report)?)?;
            Ok(())
        }
    }
}

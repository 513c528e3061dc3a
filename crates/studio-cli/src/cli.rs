use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "studio")]
#[command(about = "BMAD Studio sidecar connection monitor")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config directory (defaults to STUDIO_CONFIG_DIR, then ./.studio)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,
}

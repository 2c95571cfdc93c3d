//! Stream Stats CLI
//!
//! Reads the collector's segment data and regenerates the dashboard
//! summary. Run before each publish.
//!
//! Exit codes:
//!   0 - Summary written
//!   1 - No segment data, or any other failure

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;

use stream_stats::commands::{execute_generate, GenerateArgs};

/// Stream Stats - dashboard summary generator
#[derive(Parser, Debug)]
#[command(name = "stream-stats")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = GenerateArgs::default();

    match execute_generate(&args) {
        Ok(_) => Ok(()),
        Err(e) if e.is_missing_input() => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Err(e) => Err(e).context("Failed to generate stream stats"),
    }
}

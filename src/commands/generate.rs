//! Generate command implementation.
//!
//! The generate command:
//! 1. Loads the collector's segment data
//! 2. Aggregates totals, rankings and history
//! 3. Writes the dashboard summary
//! 4. Prints a short summary to stdout

use crate::aggregator::build_stream_stats;
use crate::output::{write_stats, StreamStats};
use crate::parser::load_segments;
use crate::utils::config::{DAILY_HISTORY_DAYS, OUTPUT_FILE, SEGMENT_FILE};
use crate::utils::error::StatsError;
use chrono::Utc;
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the generate command
///
/// **Public** - the binary always runs with the defaults
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    /// Segment data written by the collector
    pub input_path: PathBuf,

    /// Summary file read by the dashboard
    pub output_path: PathBuf,

    /// Number of most recent days kept in the history
    pub history_days: usize,

    /// Print the summary lines to stdout
    pub print_summary: bool,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(SEGMENT_FILE),
            output_path: PathBuf::from(OUTPUT_FILE),
            history_days: DAILY_HISTORY_DAYS,
            print_summary: true,
        }
    }
}

/// Execute the generate command
///
/// **Public** - main entry point called from main.rs
///
/// Nothing is written unless the input loads completely.
///
/// # Returns
/// The summary that was written
///
/// # Errors
/// * `StatsError::Load` - Input missing, unreadable or malformed
/// * `StatsError::Output` - Summary could not be written
pub fn execute_generate(args: &GenerateArgs) -> Result<StreamStats, StatsError> {
    let start_time = Instant::now();

    info!("Step 1/3: Loading segment data from {}", args.input_path.display());
    let data = load_segments(&args.input_path)?;

    info!("Step 2/3: Aggregating stream stats...");
    let stats = build_stream_stats(&data, Utc::now(), args.history_days);

    info!("Step 3/3: Writing stream stats...");
    write_stats(&stats, &args.output_path)?;

    debug!("Generate finished in {:.2?}", start_time.elapsed());

    if args.print_summary {
        for line in stats.summary_lines(&args.output_path) {
            println!("{}", line);
        }
    }

    Ok(stats)
}

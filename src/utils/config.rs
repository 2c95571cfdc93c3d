//! Configuration and constants for the CLI.
//!
//! Paths are relative to the working directory the binary is run from.

/// Segment data written by the stream collector
pub const SEGMENT_FILE: &str = "bot-data/stream-segments.json";

/// Summary read by the dashboard
pub const OUTPUT_FILE: &str = "docs/stream-stats.json";

/// Number of most recent days kept in `dailyHistory`
pub const DAILY_HISTORY_DAYS: usize = 14;

//! Output schema and writer for the dashboard summary.
//!
//! This module handles:
//! - The `stream-stats.json` schema
//! - Writing it as pretty JSON
//! - Reading it back for verification

pub mod json;
pub mod schema;

// Re-export main types and functions
pub use json::{read_stats, stats_to_string, write_stats};
pub use schema::{CategoryRanking, DailyEntry, HourlySummary, StreamStats};

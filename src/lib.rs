//! Stream Stats
//!
//! Turns the segment data recorded by the stream collector
//! (`bot-data/stream-segments.json`) into the summary the dashboard
//! reads (`docs/stream-stats.json`): totals, category rankings, hourly
//! patterns and the last two weeks of daily history.
//!
//! This crate provides the core implementation for the
//! `stream-stats` CLI tool.
//!
//! ## Getting Started
//!
//! Run the CLI from the directory holding `bot-data/` and `docs/`:
//!
//! ```bash
//! stream-stats
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;

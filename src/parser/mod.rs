//! Segment data parsing and input schema.
//!
//! This module handles:
//! - Reading the collector's JSON file
//! - Decoding it with zero/empty defaults
//! - Defining the input schema

pub mod schema;
pub mod segments;

// Re-export main types
pub use schema::{CategoryStats, DailyStats, HourlyPattern, SegmentData, Session};
pub use segments::{load_segments, parse_segments};

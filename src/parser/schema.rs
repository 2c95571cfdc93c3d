//! Input schema for the collector's segment data file.
//!
//! This module defines the structure of `stream-segments.json` as we read
//! it. Every numeric field defaults to zero and every collection to empty,
//! so the aggregator never has to deal with missing data.

use crate::utils::number::{null_as_default, zero_if_null};
use indexmap::IndexMap;
use serde::de::IgnoredAny;
use serde::Deserialize;

/// Top-level segment data document
///
/// Maps keep the order keys appear in the file; category ranking ties
/// depend on it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentData {
    /// Recorded streaming sessions
    #[serde(default, deserialize_with = "null_as_default")]
    pub sessions: Vec<Session>,

    /// Aggregates per content category, keyed by category name
    #[serde(default, deserialize_with = "null_as_default")]
    pub category_stats: IndexMap<String, CategoryStats>,

    /// Aggregates per hour of day, keyed by hour
    #[serde(default, deserialize_with = "null_as_default")]
    pub hourly_patterns: IndexMap<String, HourlyPattern>,

    /// Aggregates per calendar day, keyed by ISO date
    #[serde(default, deserialize_with = "null_as_default")]
    pub daily_stats: IndexMap<String, DailyStats>,
}

/// One streaming session
///
/// Segment contents are not needed here, only how many there are.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Session {
    #[serde(default)]
    segments: Option<Vec<IgnoredAny>>,
}

impl Session {
    /// Number of segments recorded for this session (0 if none were)
    pub fn segment_count(&self) -> usize {
        self.segments.as_ref().map_or(0, Vec::len)
    }
}

/// Viewer and chat aggregates for one category
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    #[serde(default, deserialize_with = "zero_if_null")]
    pub peak_viewers: f64,

    #[serde(default, deserialize_with = "zero_if_null")]
    pub avg_viewers: f64,

    /// Sum of all viewer samples (avg = total / samples)
    #[serde(default, deserialize_with = "zero_if_null")]
    pub total_viewers: f64,

    #[serde(default, deserialize_with = "zero_if_null")]
    pub sample_count: f64,

    #[serde(default, deserialize_with = "zero_if_null")]
    pub total_msgs: f64,
}

/// Viewer and chat aggregates for one hour of the day
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyPattern {
    #[serde(default, deserialize_with = "zero_if_null")]
    pub avg_viewers: f64,

    #[serde(default, deserialize_with = "zero_if_null")]
    pub sample_count: f64,

    #[serde(default, deserialize_with = "zero_if_null")]
    pub total_msgs: f64,
}

/// Viewer and chat aggregates for one day
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStats {
    #[serde(default, deserialize_with = "zero_if_null")]
    pub avg_viewers: f64,

    #[serde(default, deserialize_with = "zero_if_null")]
    pub peak_viewers: f64,

    #[serde(default, deserialize_with = "zero_if_null")]
    pub total_msgs: f64,

    /// Categories streamed that day, passed through untouched
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<serde_json::Value>,
}

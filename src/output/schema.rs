//! Output JSON schema definitions for the dashboard summary.
//!
//! This module defines the structure of `stream-stats.json`. The file is
//! rebuilt from scratch on every run.

use crate::utils::number::serialize_number;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level summary written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamStats {
    /// Number of recorded sessions
    pub total_sessions: usize,

    /// Number of distinct days with stats
    pub total_days: usize,

    /// Segments across all sessions
    pub total_segments: usize,

    /// Highest peak viewer count of any category
    #[serde(serialize_with = "serialize_number")]
    pub all_time_peak: f64,

    /// Viewer average over every sample, rounded half away from zero
    #[serde(serialize_with = "serialize_number")]
    pub all_time_avg: f64,

    /// Chat messages across all categories
    #[serde(serialize_with = "serialize_number")]
    pub total_messages: f64,

    /// Categories ranked by average viewers (descending)
    pub categories: Vec<CategoryRanking>,

    /// Per-hour aggregates, in input order
    pub hourly_patterns: IndexMap<String, HourlySummary>,

    /// Most recent days, oldest first
    pub daily_history: Vec<DailyEntry>,

    /// RFC 3339 timestamp when the summary was generated
    pub last_updated: String,
}

/// One row of the category ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRanking {
    pub name: String,

    #[serde(serialize_with = "serialize_number")]
    pub avg_viewers: f64,

    #[serde(serialize_with = "serialize_number")]
    pub peak_viewers: f64,

    #[serde(serialize_with = "serialize_number")]
    pub sample_count: f64,

    #[serde(serialize_with = "serialize_number")]
    pub total_msgs: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlySummary {
    #[serde(serialize_with = "serialize_number")]
    pub avg_viewers: f64,

    #[serde(serialize_with = "serialize_number")]
    pub sample_count: f64,

    #[serde(serialize_with = "serialize_number")]
    pub total_msgs: f64,
}

/// One day of the recent history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyEntry {
    pub date: String,

    #[serde(serialize_with = "serialize_number")]
    pub avg_viewers: f64,

    #[serde(serialize_with = "serialize_number")]
    pub peak_viewers: f64,

    #[serde(serialize_with = "serialize_number")]
    pub total_msgs: f64,

    pub categories: Vec<serde_json::Value>,
}

impl StreamStats {
    /// Human-readable run summary, one entry per console line
    ///
    /// **Public** - printed by the generate command after a successful write
    pub fn summary_lines(&self, output_path: &Path) -> Vec<String> {
        vec![
            format!("✅ Stream stats generated → {}", output_path.display()),
            format!(
                "   {} sessions | {} data points | {} categories | {} days",
                self.total_sessions,
                self.total_segments,
                self.categories.len(),
                self.daily_history.len()
            ),
            format!(
                "   All-time peak: {} | All-time avg: {} | Messages: {}",
                self.all_time_peak, self.all_time_avg, self.total_messages
            ),
        ]
    }
}

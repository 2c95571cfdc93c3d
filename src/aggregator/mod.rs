//! Aggregation of segment data into the dashboard summary.
//!
//! This module transforms decoded segment data into:
//! - Session, day and segment counts
//! - All-time peak and average viewers
//! - Category rankings, recent daily history and hourly patterns

pub mod rankings;
pub mod totals;

// Re-export main types and functions
pub use rankings::{rank_categories, recent_daily_history, summarize_hourly};
pub use totals::{calculate_all_time, count_totals, rounded_average, AllTimeMetrics, Totals};

use crate::output::schema::StreamStats;
use crate::parser::schema::SegmentData;
use chrono::{DateTime, SecondsFormat, Utc};
use log::debug;

/// Build the full summary from segment data
///
/// **Public** - main entry point for aggregation
///
/// Everything except `last_updated` is a pure function of `data`.
///
/// # Arguments
/// * `data` - Decoded segment data
/// * `generated_at` - Timestamp recorded as `lastUpdated`
/// * `history_days` - Number of most recent days kept in the history
pub fn build_stream_stats(data: &SegmentData, generated_at: DateTime<Utc>, history_days: usize) -> StreamStats {
    let totals = count_totals(data);
    let all_time = calculate_all_time(&data.category_stats);
    let categories = rank_categories(&data.category_stats);
    let daily_history = recent_daily_history(&data.daily_stats, history_days);
    let hourly_patterns = summarize_hourly(&data.hourly_patterns);

    debug!(
        "Aggregated {} categories, {} hours, {} history days",
        categories.len(),
        hourly_patterns.len(),
        daily_history.len()
    );

    StreamStats {
        total_sessions: totals.total_sessions,
        total_days: totals.total_days,
        total_segments: totals.total_segments,
        all_time_peak: all_time.peak,
        all_time_avg: all_time.avg,
        total_messages: all_time.total_messages,
        categories,
        hourly_patterns,
        daily_history,
        last_updated: format_timestamp(generated_at),
    }
}

/// RFC 3339 in UTC with millisecond precision, e.g. `2024-01-01T12:00:00.000Z`
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 12, 30, 5).unwrap();
        assert_eq!(format_timestamp(ts), "2024-01-01T12:30:05.000Z");
    }

    #[test]
    fn test_build_from_empty_data() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let stats = build_stream_stats(&SegmentData::default(), ts, 14);

        assert_eq!(stats.total_sessions, 0);
        assert_eq!(stats.total_days, 0);
        assert_eq!(stats.total_segments, 0);
        assert_eq!(stats.all_time_peak, 0.0);
        assert_eq!(stats.all_time_avg, 0.0);
        assert_eq!(stats.total_messages, 0.0);
        assert!(stats.categories.is_empty());
        assert!(stats.hourly_patterns.is_empty());
        assert!(stats.daily_history.is_empty());
        assert_eq!(stats.last_updated, "2024-01-01T00:00:00.000Z");
    }
}

//! Headline totals and all-time viewer metrics.
//!
//! Counts come straight from the collection sizes. The all-time peak and
//! average are derived from the per-category aggregates, which already
//! cover every sample the collector has seen.

use crate::parser::schema::{CategoryStats, SegmentData};
use indexmap::IndexMap;
use log::{debug, warn};

/// Collection counts for the summary header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub total_sessions: usize,
    pub total_days: usize,
    pub total_segments: usize,
}

/// Count sessions, days and segments
///
/// **Public** - main entry point for the count totals
pub fn count_totals(data: &SegmentData) -> Totals {
    let total_segments: usize = data.sessions.iter().map(|s| s.segment_count()).sum();

    Totals {
        total_sessions: data.sessions.len(),
        total_days: data.daily_stats.len(),
        total_segments,
    }
}

/// Viewer and message metrics across every category
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AllTimeMetrics {
    /// Highest category peak, never below zero
    pub peak: f64,

    /// Rounded mean viewers per sample, 0 without samples
    pub avg: f64,

    pub total_viewers: f64,
    pub total_samples: f64,
    pub total_messages: f64,
}

/// Calculate all-time metrics from the category aggregates
///
/// **Public** - main entry point for the all-time numbers
///
/// # Arguments
/// * `category_stats` - Per-category aggregates from the segment data
///
/// # Returns
/// Peak, rounded average and the raw sums behind them
pub fn calculate_all_time(category_stats: &IndexMap<String, CategoryStats>) -> AllTimeMetrics {
    let mut metrics = AllTimeMetrics::default();

    for (name, stats) in category_stats {
        if stats.peak_viewers < stats.avg_viewers {
            warn!(
                "Category '{}' has peak {} below its average {}",
                name, stats.peak_viewers, stats.avg_viewers
            );
        }

        metrics.peak = metrics.peak.max(stats.peak_viewers);
        metrics.total_viewers += stats.total_viewers;
        metrics.total_samples += stats.sample_count;
        metrics.total_messages += stats.total_msgs;
    }

    metrics.avg = rounded_average(metrics.total_viewers, metrics.total_samples);

    debug!(
        "All-time metrics: peak {} | avg {} over {} samples | {} messages",
        metrics.peak, metrics.avg, metrics.total_samples, metrics.total_messages
    );

    metrics
}

/// Mean rounded half away from zero; 0 when there are no samples
///
/// Stays an `f64` so very large sums are not clamped to an integer type.
pub fn rounded_average(total: f64, samples: f64) -> f64 {
    if samples > 0.0 {
        (total / samples).round()
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_segments;

    fn category(peak: f64, avg: f64, total: f64, samples: f64, msgs: f64) -> CategoryStats {
        CategoryStats {
            peak_viewers: peak,
            avg_viewers: avg,
            total_viewers: total,
            sample_count: samples,
            total_msgs: msgs,
        }
    }

    #[test]
    fn test_count_totals() {
        let data = parse_segments(
            br#"{
                "sessions": [{"segments": [1, 2]}, {}, {"segments": [3, 4, 5]}],
                "dailyStats": {"2024-01-01": {}, "2024-01-02": {}}
            }"#,
        )
        .unwrap();

        let totals = count_totals(&data);

        assert_eq!(
            totals,
            Totals {
                total_sessions: 3,
                total_days: 2,
                total_segments: 5,
            }
        );
    }

    #[test]
    fn test_count_totals_empty() {
        assert_eq!(count_totals(&SegmentData::default()), Totals::default());
    }

    #[test]
    fn test_calculate_all_time() {
        let mut stats = IndexMap::new();
        stats.insert("chatting".to_string(), category(50.0, 30.0, 300.0, 10.0, 20.0));
        stats.insert("gaming".to_string(), category(80.0, 40.0, 400.0, 10.0, 5.0));

        let metrics = calculate_all_time(&stats);

        assert_eq!(metrics.peak, 80.0);
        assert_eq!(metrics.avg, 35.0);
        assert_eq!(metrics.total_viewers, 700.0);
        assert_eq!(metrics.total_samples, 20.0);
        assert_eq!(metrics.total_messages, 25.0);
    }

    #[test]
    fn test_calculate_all_time_no_categories() {
        let metrics = calculate_all_time(&IndexMap::new());
        assert_eq!(metrics.peak, 0.0);
        assert_eq!(metrics.avg, 0.0);
    }

    #[test]
    fn test_calculate_all_time_zero_samples() {
        let mut stats = IndexMap::new();
        stats.insert("idle".to_string(), category(12.0, 0.0, 90.0, 0.0, 3.0));

        let metrics = calculate_all_time(&stats);

        assert_eq!(metrics.peak, 12.0);
        assert_eq!(metrics.avg, 0.0);
        assert_eq!(metrics.total_messages, 3.0);
    }

    #[test]
    fn test_rounded_average_half_away_from_zero() {
        assert_eq!(rounded_average(5.0, 2.0), 3.0);
        assert_eq!(rounded_average(7.0, 2.0), 4.0);
        assert_eq!(rounded_average(10.0, 3.0), 3.0);
        assert_eq!(rounded_average(20.0, 3.0), 7.0);
        assert_eq!(rounded_average(1.0, 0.0), 0.0);
    }

    #[test]
    fn test_rounded_average_large_sums_not_clamped() {
        // i64::MAX is about 9.2e18
        let avg = rounded_average(4.0e19, 2.0);
        assert_eq!(avg, 2.0e19);
        assert!(avg > i64::MAX as f64);
    }
}

//! Category ranking, recent daily history and hourly patterns.

use crate::output::schema::{CategoryRanking, DailyEntry, HourlySummary};
use crate::parser::schema::{CategoryStats, DailyStats, HourlyPattern};
use indexmap::IndexMap;
use log::debug;
use std::cmp::Ordering;

/// Rank categories by average viewers
///
/// **Public** - main entry point for the category ranking
///
/// # Arguments
/// * `category_stats` - Per-category aggregates, in document order
///
/// # Returns
/// One ranking per category, highest average first. Categories with equal
/// averages keep their document order.
pub fn rank_categories(category_stats: &IndexMap<String, CategoryStats>) -> Vec<CategoryRanking> {
    let mut rankings: Vec<CategoryRanking> = category_stats
        .iter()
        .map(|(name, stats)| CategoryRanking {
            name: name.clone(),
            avg_viewers: stats.avg_viewers,
            peak_viewers: stats.peak_viewers,
            sample_count: stats.sample_count,
            total_msgs: stats.total_msgs,
        })
        .collect();

    // sort_by is stable; -0 and 0 compare equal
    rankings.sort_by(|a, b| {
        b.avg_viewers
            .partial_cmp(&a.avg_viewers)
            .unwrap_or(Ordering::Equal)
    });

    rankings
}

/// Take the most recent days of stats
///
/// **Public** - main entry point for the history slice
///
/// # Arguments
/// * `daily_stats` - Per-day aggregates keyed by ISO date
/// * `days` - Maximum number of days to keep
///
/// # Returns
/// Up to `days` entries with the latest dates, oldest first
pub fn recent_daily_history(daily_stats: &IndexMap<String, DailyStats>, days: usize) -> Vec<DailyEntry> {
    let mut dates: Vec<&String> = daily_stats.keys().collect();
    dates.sort();

    let start = dates.len().saturating_sub(days);
    debug!("Keeping {} of {} days", dates.len() - start, dates.len());

    dates[start..]
        .iter()
        .map(|&date| {
            let day = &daily_stats[date];
            DailyEntry {
                date: date.clone(),
                avg_viewers: day.avg_viewers,
                peak_viewers: day.peak_viewers,
                total_msgs: day.total_msgs,
                categories: day.categories.clone(),
            }
        })
        .collect()
}

/// Copy the hourly patterns into output form, one entry per input hour
pub fn summarize_hourly(hourly_patterns: &IndexMap<String, HourlyPattern>) -> IndexMap<String, HourlySummary> {
    hourly_patterns
        .iter()
        .map(|(hour, pattern)| {
            (
                hour.clone(),
                HourlySummary {
                    avg_viewers: pattern.avg_viewers,
                    sample_count: pattern.sample_count,
                    total_msgs: pattern.total_msgs,
                },
            )
        })
        .collect()
}

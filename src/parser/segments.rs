//! Loader for the collector's segment data file.
//!
//! Reads `stream-segments.json` from disk and decodes it into
//! [`SegmentData`]. There is no partial recovery: the file either decodes
//! completely or the run stops.

use super::schema::SegmentData;
use crate::utils::error::LoadError;
use log::debug;
use std::io::ErrorKind;
use std::path::Path;

/// Load segment data from a JSON file
///
/// **Public** - main entry point for reading input
///
/// # Arguments
/// * `input_path` - Path to the collector's segment data file
///
/// # Returns
/// Decoded segment data with all defaults applied
///
/// # Errors
/// * `LoadError::MissingInput` - The file does not exist
/// * `LoadError::ReadFailed` - The file exists but cannot be read
/// * `LoadError::MalformedInput` - The content is not a valid segment document
pub fn load_segments(input_path: impl AsRef<Path>) -> Result<SegmentData, LoadError> {
    let input_path = input_path.as_ref();

    debug!("Reading segment data from: {}", input_path.display());

    let bytes = std::fs::read(input_path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            LoadError::MissingInput {
                path: input_path.to_path_buf(),
            }
        } else {
            LoadError::ReadFailed {
                path: input_path.to_path_buf(),
                source,
            }
        }
    })?;

    let data = parse_segments(&bytes).map_err(|source| LoadError::MalformedInput {
        path: input_path.to_path_buf(),
        source,
    })?;

    debug!(
        "Segment data loaded: {} sessions, {} categories, {} hours, {} days",
        data.sessions.len(),
        data.category_stats.len(),
        data.hourly_patterns.len(),
        data.daily_stats.len()
    );

    Ok(data)
}

/// Decode segment data from raw JSON bytes
///
/// **Public** - useful for tests and in-memory input
pub fn parse_segments(bytes: &[u8]) -> Result<SegmentData, serde_json::Error> {
    serde_json::from_slice(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::CategoryStats;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_document() {
        let json = br#"{
            "sessions": [{"segments": [{}, {}, {}]}, {"segments": []}, {}],
            "categoryStats": {
                "chatting": {"peakViewers": 50, "avgViewers": 30, "totalViewers": 300, "sampleCount": 10, "totalMsgs": 20}
            },
            "hourlyPatterns": {"14": {"avgViewers": 28.5, "sampleCount": 5, "totalMsgs": 10}},
            "dailyStats": {"2024-01-01": {"avgViewers": 25, "peakViewers": 40, "totalMsgs": 15, "categories": ["chatting"]}}
        }"#;

        let data = parse_segments(json).unwrap();

        let counts: Vec<usize> = data.sessions.iter().map(|s| s.segment_count()).collect();
        assert_eq!(counts, vec![3, 0, 0]);
        assert_eq!(data.category_stats["chatting"].total_viewers, 300.0);
        assert_eq!(data.hourly_patterns["14"].avg_viewers, 28.5);
        assert_eq!(data.daily_stats["2024-01-01"].categories.len(), 1);
    }

    #[test]
    fn test_parse_empty_object() {
        let data = parse_segments(b"{}").unwrap();
        assert!(data.sessions.is_empty());
        assert!(data.category_stats.is_empty());
        assert!(data.hourly_patterns.is_empty());
        assert!(data.daily_stats.is_empty());
    }

    #[test]
    fn test_parse_nulls_and_missing_fields() {
        let json = br#"{
            "sessions": [{"segments": null}],
            "categoryStats": {"music": {"avgViewers": null}},
            "hourlyPatterns": null,
            "dailyStats": {"2024-02-02": {"categories": null}}
        }"#;

        let data = parse_segments(json).unwrap();

        assert_eq!(data.sessions[0].segment_count(), 0);
        assert_eq!(data.category_stats["music"], CategoryStats::default());
        assert!(data.hourly_patterns.is_empty());
        assert!(data.daily_stats["2024-02-02"].categories.is_empty());
    }

    #[test]
    fn test_parse_keeps_key_order() {
        let json = br#"{"categoryStats": {"zeta": {}, "alpha": {}, "mid": {}}}"#;
        let data = parse_segments(json).unwrap();
        let keys: Vec<&str> = data.category_stats.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = load_segments(temp_dir.path().join("absent.json"));
        assert!(matches!(result, Err(LoadError::MissingInput { .. })));
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let result = load_segments(file.path());
        assert!(matches!(result, Err(LoadError::MalformedInput { .. })));
    }

    #[test]
    fn test_load_wrong_shape() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"sessions": "yesterday"}"#).unwrap();

        let result = load_segments(file.path());
        assert!(matches!(result, Err(LoadError::MalformedInput { .. })));
    }

    #[test]
    fn test_load_directory_is_read_failure() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = load_segments(temp_dir.path());
        assert!(matches!(result, Err(LoadError::ReadFailed { .. })));
    }
}

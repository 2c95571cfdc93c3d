//! JSON summary output writer.
//!
//! Writes StreamStats structs to JSON files with proper formatting.

use super::schema::StreamStats;
use crate::utils::error::{LoadError, OutputError};
use log::{debug, info};
use std::io::ErrorKind;
use std::path::Path;

/// Write the summary to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// The file is replaced wholesale. Its parent directory must already
/// exist; a missing directory is reported as a write failure.
///
/// # Arguments
/// * `stats` - Summary to write
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path is empty or a directory
///
/// # Example
/// ```ignore
/// let stats = build_stream_stats(&data, Utc::now(), DAILY_HISTORY_DAYS);
/// write_stats(&stats, "docs/stream-stats.json")?;
/// ```
pub fn write_stats(stats: &StreamStats, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing stream stats to: {}", output_path.display());

    validate_output_path(output_path)?;

    let json = stats_to_string(stats)?;

    std::fs::write(output_path, &json).map_err(|source| OutputError::WriteFailed {
        path: output_path.to_path_buf(),
        source,
    })?;

    info!("Stream stats written successfully ({} bytes)", json.len());

    Ok(())
}

/// Serialize the summary as pretty-printed JSON (2-space indent)
///
/// **Public** - useful for tests and debugging
pub fn stats_to_string(stats: &StreamStats) -> Result<String, OutputError> {
    serde_json::to_string_pretty(stats).map_err(OutputError::SerializationFailed)
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Read a summary back from a JSON file
///
/// **Public** - useful for validation and testing
///
/// # Errors
/// * `LoadError::MissingInput` - File does not exist
/// * `LoadError::ReadFailed` - File read error
/// * `LoadError::MalformedInput` - JSON parse error
pub fn read_stats(input_path: impl AsRef<Path>) -> Result<StreamStats, LoadError> {
    let input_path = input_path.as_ref();

    debug!("Reading stream stats from: {}", input_path.display());

    let bytes = std::fs::read(input_path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::MissingInput {
            path: input_path.to_path_buf(),
        },
        _ => LoadError::ReadFailed {
            path: input_path.to_path_buf(),
            source,
        },
    })?;

    let stats: StreamStats =
        serde_json::from_slice(&bytes).map_err(|source| LoadError::MalformedInput {
            path: input_path.to_path_buf(),
            source,
        })?;

    debug!(
        "Stream stats loaded: {} sessions, generated {}",
        stats.total_sessions, stats.last_updated
    );

    Ok(stats)
}

//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the segment data
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("No segment data found at {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed segment data in {}: {source}", path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Any failure of a generate run
#[derive(Error, Debug)]
pub enum StatsError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

impl StatsError {
    /// True when the run failed only because there is no input yet
    pub fn is_missing_input(&self) -> bool {
        matches!(self, StatsError::Load(LoadError::MissingInput { .. }))
    }
}

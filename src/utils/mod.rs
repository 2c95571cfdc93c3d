//! Utility modules for configuration, error handling, and number decoding.

pub mod config;
pub mod error;
pub mod number;

// Re-export commonly used error types for convenience
pub use error::{LoadError, OutputError, StatsError};

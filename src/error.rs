//! Error handling types and utilities.

use crate::types::Category;
use std::path::PathBuf;
use thiserror::Error;

/// A specialized Result type for application-level operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods in the CLI and loader orchestration.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when a query pattern cannot be compiled.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Invalid search pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Error returned when loading a category index fails.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Index file could not be read.
    #[error("Failed to read {category} index at {}: {source}", .path.display())]
    Io {
        category: Category,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Index file did not contain a JSON array.
    #[error("Failed to parse {category} index: {source}")]
    Parse {
        category: Category,
        #[source]
        source: serde_json::Error,
    },
    /// Index file had an unexpected shape around the JSON payload.
    #[error("Unexpected {category} index format: {reason}")]
    Format {
        category: Category,
        reason: String,
    },
}

/// Error returned when reading the configuration file fails.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

//! Error types for freshet-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the freshet-io crate.
///
/// Covers file access, CSV format problems, unparsable cells and invalid
/// reader configuration.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the CSV library.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Wraps an operating-system I/O failure.
    #[error("i/o error: {reason}")]
    Io {
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// Returned when a required column is not present in the header.
    #[error("column '{name}' not found in {}", path.display())]
    MissingColumn {
        /// Name of the missing column.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when a timestamp cell does not match the configured format.
    #[error("row {row}: cannot parse timestamp '{value}' with format '{format}'")]
    InvalidTimestamp {
        /// One-based data row number.
        row: usize,
        /// Offending cell content.
        value: String,
        /// Configured `chrono` format string.
        format: String,
    },

    /// Returned when a flow cell is neither a number nor a missing marker.
    #[error("row {row}: cannot parse value '{value}' as a number")]
    InvalidNumber {
        /// One-based data row number.
        row: usize,
        /// Offending cell content.
        value: String,
    },
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Io {
            reason: e.to_string(),
        }
    }
}

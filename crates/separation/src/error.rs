//! Error types for the freshet-separation crate.

use freshet_series::SeriesError;

/// Error type for all fallible operations in the freshet-separation crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeparationError {
    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Wraps a failure while building or gap-filling the time grid.
    #[error("time grid: {0}")]
    Series(#[from] SeriesError),
}

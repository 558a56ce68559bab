//! Error types for the freshet-series crate.

use chrono::NaiveDateTime;

/// Error type for all fallible operations in the freshet-series crate.
///
/// Missing flow values are not errors; they travel through the grid as
/// `None`. This enum only covers malformed input and configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    /// Returned when no observations were supplied.
    #[error("no observations supplied")]
    EmptyObservations,

    /// Returned when a step size other than 5, 15 or 60 minutes is requested.
    #[error("unsupported step size: {minutes} minutes (must be 5, 15 or 60)")]
    UnsupportedStep {
        /// The rejected step size in minutes.
        minutes: u32,
    },

    /// Returned when an observation carries a negative flow value.
    #[error("negative flow {flow} at {timestamp}")]
    NegativeFlow {
        /// Timestamp of the offending observation.
        timestamp: NaiveDateTime,
        /// The negative flow value.
        flow: f64,
    },

    /// Returned when the maximum interpolation gap is not finite and positive.
    #[error("invalid maximum gap duration: {hours} hours (must be finite and > 0)")]
    InvalidGapBound {
        /// The rejected gap duration in hours.
        hours: f64,
    },
}

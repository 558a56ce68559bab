//! Error types for the freshet-gev crate.

/// Error type for all fallible operations in the freshet-gev crate.
///
/// Variants split into input-validation failures and fit failures; use
/// [`GevError::is_fit_failure`] to tell them apart.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GevError {
    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the sample is empty.
    #[error("sample is empty")]
    EmptySample,

    /// Returned when the sample contains NaN or infinite values.
    #[error("sample contains non-finite values")]
    NonFiniteSample,

    /// Returned when every sample value is identical.
    #[error("sample is constant (zero variance)")]
    ConstantSample,

    /// Returned when the sample has too few distinct values to fit three parameters.
    #[error("sample has {distinct} distinct values, need at least {min}")]
    TooFewDistinct {
        /// Number of distinct values found.
        distinct: usize,
        /// Minimum number of distinct values required.
        min: usize,
    },

    /// Returned when the likelihood optimisation does not reach a finite optimum.
    #[error("optimisation failed to converge")]
    OptimizationFailed,
}

impl GevError {
    /// Returns `true` for degenerate-sample and optimiser failures, `false`
    /// for input validation failures.
    pub fn is_fit_failure(&self) -> bool {
        matches!(
            self,
            Self::ConstantSample | Self::TooFewDistinct { .. } | Self::OptimizationFailed
        )
    }
}

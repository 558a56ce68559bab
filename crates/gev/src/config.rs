//! Configuration for return-period curves.

use crate::error::GevError;

/// Default number of points on the return-period grid.
pub const DEFAULT_N_POINTS: usize = 100_000;

/// Return-period grid settings for [`fit_gev`](crate::fit_gev).
///
/// # Example
///
/// ```
/// use freshet_gev::FrequencyConfig;
///
/// let config = FrequencyConfig::new(500.0).with_n_points(1_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct FrequencyConfig {
    max_return_period: f64,
    n_points: usize,
}

impl FrequencyConfig {
    /// Creates a grid from 1 to `max_return_period` years with
    /// [`DEFAULT_N_POINTS`] points.
    pub fn new(max_return_period: f64) -> Self {
        Self {
            max_return_period,
            n_points: DEFAULT_N_POINTS,
        }
    }

    /// Sets the number of grid points.
    pub fn with_n_points(mut self, n_points: usize) -> Self {
        self.n_points = n_points;
        self
    }

    /// Largest return period on the grid (years).
    pub fn max_return_period(&self) -> f64 {
        self.max_return_period
    }

    /// Number of grid points.
    pub fn n_points(&self) -> usize {
        self.n_points
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GevError::InvalidConfig`] if `max_return_period` is not
    /// finite and greater than one, or fewer than two grid points are
    /// requested.
    pub fn validate(&self) -> Result<(), GevError> {
        if !self.max_return_period.is_finite() || self.max_return_period <= 1.0 {
            return Err(GevError::InvalidConfig {
                reason: format!(
                    "max_return_period must be finite and > 1, got {}",
                    self.max_return_period
                ),
            });
        }
        if self.n_points < 2 {
            return Err(GevError::InvalidConfig {
                reason: format!("n_points must be at least 2, got {}", self.n_points),
            });
        }
        Ok(())
    }
}

impl Default for FrequencyConfig {
    fn default() -> Self {
        Self::new(100.0)
    }
}

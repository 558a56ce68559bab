//! Configuration for baseflow separation and peak filtering.

use freshet_series::StepSize;

use crate::error::SeparationError;

/// Default recession slope `k` in m³ s⁻¹ km⁻² h⁻¹ (Hewlett and Hibbert, 1967).
pub const DEFAULT_RECESSION_K: f64 = 0.000546;

/// Catchment parameters and filtering bounds for one separation run.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use freshet_separation::SeparationConfig;
/// use freshet_series::StepSize;
///
/// let config = SeparationConfig::new(1461.0)
///     .with_step(StepSize::FifteenMinutes)
///     .with_max_gap_hours(Some(12.0))
///     .with_min_peak_hours(Some(6.0));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct SeparationConfig {
    area_km2: f64,
    recession_k: f64,
    step: StepSize,
    max_gap_hours: Option<f64>,
    min_peak_hours: Option<f64>,
}

impl SeparationConfig {
    /// Creates a configuration for a catchment of `area_km2` square kilometres.
    ///
    /// Defaults: `recession_k = 0.000546`, `step = 15 min`, no interpolation
    /// bound and no minimum peak duration.
    pub fn new(area_km2: f64) -> Self {
        Self {
            area_km2,
            recession_k: DEFAULT_RECESSION_K,
            step: StepSize::default(),
            max_gap_hours: None,
            min_peak_hours: None,
        }
    }

    // --- Builder methods ---

    /// Sets the recession slope constant `k`.
    pub fn with_recession_k(mut self, k: f64) -> Self {
        self.recession_k = k;
        self
    }

    /// Sets the grid step size.
    pub fn with_step(mut self, step: StepSize) -> Self {
        self.step = step;
        self
    }

    /// Sets the longest gap (hours) that may be filled by interpolation.
    pub fn with_max_gap_hours(mut self, hours: Option<f64>) -> Self {
        self.max_gap_hours = hours;
        self
    }

    /// Sets the shortest total duration (hours) an event must last to be kept.
    pub fn with_min_peak_hours(mut self, hours: Option<f64>) -> Self {
        self.min_peak_hours = hours;
        self
    }

    // --- Accessors ---

    /// Catchment area in km².
    pub fn area_km2(&self) -> f64 {
        self.area_km2
    }

    /// Recession slope constant `k`.
    pub fn recession_k(&self) -> f64 {
        self.recession_k
    }

    /// Grid step size.
    pub fn step(&self) -> StepSize {
        self.step
    }

    /// Interpolation bound in hours, if any.
    pub fn max_gap_hours(&self) -> Option<f64> {
        self.max_gap_hours
    }

    /// Minimum event duration in hours, if any.
    pub fn min_peak_hours(&self) -> Option<f64> {
        self.min_peak_hours
    }

    /// Rise of the separation line per hour, `k × A`.
    pub fn slope(&self) -> f64 {
        self.recession_k * self.area_km2
    }

    /// Validates this configuration.
    ///
    /// Area and `k` must be finite and positive; both optional durations,
    /// when set, must be finite and positive.
    pub fn validate(&self) -> Result<(), SeparationError> {
        check_positive("area_km2", self.area_km2)?;
        check_positive("recession_k", self.recession_k)?;
        if let Some(h) = self.max_gap_hours {
            check_positive("max_gap_hours", h)?;
        }
        if let Some(h) = self.min_peak_hours {
            check_positive("min_peak_hours", h)?;
        }
        Ok(())
    }
}

fn check_positive(name: &str, value: f64) -> Result<(), SeparationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SeparationError::InvalidConfig {
            reason: format!("{name} must be finite and > 0, got {value}"),
        });
    }
    Ok(())
}

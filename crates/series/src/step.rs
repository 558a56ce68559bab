//! Supported grid step sizes.

use std::fmt;

use chrono::TimeDelta;

use crate::error::SeriesError;

/// Fixed time step of the analysis grid.
///
/// Only the three resolutions used by gauging networks are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StepSize {
    /// 5-minute records.
    FiveMinutes,
    /// 15-minute records.
    #[default]
    FifteenMinutes,
    /// Hourly records.
    SixtyMinutes,
}

impl StepSize {
    /// Parses a step size given in minutes.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::UnsupportedStep`] for anything other than
    /// 5, 15 or 60.
    pub fn from_minutes(minutes: u32) -> Result<Self, SeriesError> {
        match minutes {
            5 => Ok(Self::FiveMinutes),
            15 => Ok(Self::FifteenMinutes),
            60 => Ok(Self::SixtyMinutes),
            other => Err(SeriesError::UnsupportedStep { minutes: other }),
        }
    }

    /// Step length in minutes.
    pub fn minutes(self) -> u32 {
        match self {
            Self::FiveMinutes => 5,
            Self::FifteenMinutes => 15,
            Self::SixtyMinutes => 60,
        }
    }

    /// Step length in hours.
    pub fn hours(self) -> f64 {
        f64::from(self.minutes()) / 60.0
    }

    /// Number of grid steps in one hour (12, 4 or 1).
    pub fn steps_per_hour(self) -> u32 {
        60 / self.minutes()
    }

    /// Step length as a chrono duration.
    pub fn duration(self) -> TimeDelta {
        TimeDelta::minutes(i64::from(self.minutes()))
    }

    /// Number of whole steps that fit in `hours`.
    pub fn steps_within(self, hours: f64) -> usize {
        (hours * f64::from(self.steps_per_hour())).floor().max(0.0) as usize
    }
}

impl TryFrom<u32> for StepSize {
    type Error = SeriesError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        Self::from_minutes(minutes)
    }
}

impl fmt::Display for StepSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.minutes())
    }
}

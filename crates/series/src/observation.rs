//! Raw gauge observations.

use chrono::NaiveDateTime;

/// A single (timestamp, flow) reading from a data source.
///
/// Flow is in m³/s. A missing reading is represented as `None`; non-finite
/// values passed to [`Observation::new`] are treated as missing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    timestamp: NaiveDateTime,
    flow: Option<f64>,
}

impl Observation {
    /// Creates an observation, mapping NaN and infinities to a missing value.
    pub fn new(timestamp: NaiveDateTime, flow: f64) -> Self {
        Self {
            timestamp,
            flow: flow.is_finite().then_some(flow),
        }
    }

    /// Creates an observation with no flow value.
    pub fn missing(timestamp: NaiveDateTime) -> Self {
        Self {
            timestamp,
            flow: None,
        }
    }

    /// Observation time.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Observed flow, if any.
    pub fn flow(&self) -> Option<f64> {
        self.flow
    }
}

impl From<(NaiveDateTime, Option<f64>)> for Observation {
    fn from((timestamp, flow): (NaiveDateTime, Option<f64>)) -> Self {
        match flow {
            Some(v) => Self::new(timestamp, v),
            None => Self::missing(timestamp),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn nan_is_missing() {
        assert_eq!(Observation::new(ts(), f64::NAN).flow(), None);
        assert_eq!(Observation::new(ts(), f64::INFINITY).flow(), None);
    }

    #[test]
    fn finite_is_kept() {
        assert_eq!(Observation::new(ts(), 12.5).flow(), Some(12.5));
    }

    #[test]
    fn from_tuple() {
        let obs: Observation = (ts(), None).into();
        assert!(obs.flow().is_none());
        let obs: Observation = (ts(), Some(3.0)).into();
        assert_eq!(obs.flow(), Some(3.0));
    }
}

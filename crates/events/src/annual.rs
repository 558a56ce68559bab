//! Per-year extreme table.
//!
//! Two maxima are kept per year and selected independently: the largest
//! observed flow of the year, and the event with the largest volume whose
//! crest falls in that year. They need not refer to the same flood.

use std::collections::BTreeMap;

use chrono::Datelike;
use freshet_separation::{EventId, LabeledSeries};

use crate::event::PeakEvent;

/// One row of the annual extreme table.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnualExtreme {
    /// Calendar year.
    pub year: i32,
    /// Largest flow observed during the year (m³/s).
    pub max_flow: f64,
    /// Event with the largest volume cresting in this year.
    pub event_id: EventId,
    /// Duration of that event in hours.
    pub duration_hours: f64,
    /// Crest flow of that event (m³/s).
    pub crest_flow: f64,
    /// Volume of that event in m³.
    pub volume_m3: f64,
}

impl AnnualExtreme {
    /// Event volume in million m³.
    pub fn volume_mcm(&self) -> f64 {
        self.volume_m3 / 1e6
    }

    /// Mean flow rate over the event, `volume / (duration × 3600)`, in m³/s.
    pub fn average_volume_rate(&self) -> f64 {
        if self.duration_hours > 0.0 {
            self.volume_m3 / (self.duration_hours * 3600.0)
        } else {
            0.0
        }
    }
}

/// Builds one row per calendar year that contains at least one event crest.
///
/// `max_flow` is taken from the observed series over the whole year,
/// regardless of event membership; steps without an observation fall back
/// to the gap-filled value. Volume ties go to the earlier event.
pub fn annual_extremes(series: &LabeledSeries, events: &[PeakEvent]) -> Vec<AnnualExtreme> {
    let mut by_volume: BTreeMap<i32, &PeakEvent> = BTreeMap::new();
    for event in events {
        by_volume
            .entry(event.crest_time.year())
            .and_modify(|best| {
                if event.volume_m3 > best.volume_m3 {
                    *best = event;
                }
            })
            .or_insert(event);
    }

    let mut max_flow: BTreeMap<i32, f64> = BTreeMap::new();
    for r in series.records() {
        let year = r.timestamp.year();
        if !by_volume.contains_key(&year) {
            continue;
        }
        if let Some(q) = r.raw_flow.or(r.flow) {
            let slot = max_flow.entry(year).or_insert(q);
            *slot = slot.max(q);
        }
    }

    by_volume
        .into_iter()
        .map(|(year, event)| AnnualExtreme {
            year,
            // An event crest lies in this year, so the year has a defined flow.
            max_flow: max_flow.get(&year).copied().unwrap_or(event.crest_flow),
            event_id: event.event_id,
            duration_hours: event.duration_hours,
            crest_flow: event.crest_flow,
            volume_m3: event.volume_m3,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn average_rate_over_event() {
        let row = AnnualExtreme {
            year: 2001,
            max_flow: 50.0,
            event_id: first_id(),
            duration_hours: 10.0,
            crest_flow: 40.0,
            volume_m3: 720_000.0,
        };
        assert_relative_eq!(row.average_volume_rate(), 20.0);
        assert_relative_eq!(row.volume_mcm(), 0.72);
    }

    #[test]
    fn zero_duration_rate_is_zero() {
        let row = AnnualExtreme {
            year: 2001,
            max_flow: 5.0,
            event_id: first_id(),
            duration_hours: 0.0,
            crest_flow: 5.0,
            volume_m3: 0.0,
        };
        assert_eq!(row.average_volume_rate(), 0.0);
    }

    fn first_id() -> EventId {
        use chrono::{NaiveDate, TimeDelta};
        use freshet_separation::{SeparationConfig, separate};
        use freshet_series::{Observation, StepSize};

        let t0 = NaiveDate::from_ymd_opt(2001, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let obs: Vec<Observation> = [1.0, 1.0, 5.0, 1.0, 1.0]
            .iter()
            .enumerate()
            .map(|(h, &q)| Observation::new(t0 + TimeDelta::hours(h as i64), q))
            .collect();
        let config = SeparationConfig::new(1.0).with_step(StepSize::SixtyMinutes);
        separate(&obs, &config).unwrap().event_ids()[0]
    }
}

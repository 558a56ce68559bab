//! Labeled per-step records.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDateTime;
use freshet_series::StepSize;

/// Identifier of a flood-peak event. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventId(u32);

impl EventId {
    pub(crate) fn new(id: u32) -> Self {
        debug_assert!(id > 0, "event ids start at 1");
        Self(id)
    }

    /// The numeric identifier.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One grid step after separation and labelling.
///
/// Flows are in m³/s. `None` marks an undefined value: an unfilled data gap,
/// or for `peakflow` a step that belongs to no retained event.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesRecord {
    /// Grid timestamp.
    pub timestamp: NaiveDateTime,
    /// Hours since the previous step (zero for the first step).
    pub step_hours: f64,
    /// Observed flow.
    pub raw_flow: Option<f64>,
    /// Gap-filled flow.
    pub flow: Option<f64>,
    /// Baseflow, never above `flow`.
    pub baseflow: Option<f64>,
    /// `flow - baseflow` for steps inside a retained event.
    pub peakflow: Option<f64>,
    /// Event the step belongs to.
    pub event_id: Option<EventId>,
}

impl TimeSeriesRecord {
    /// Flow volume of this step in m³ (`flow × 3600 × step_hours`).
    ///
    /// Only defined for steps inside an event with a defined flow.
    pub fn volume_m3(&self) -> Option<f64> {
        self.event_id?;
        self.flow.map(|q| q * 3600.0 * self.step_hours)
    }
}

/// Output of a separation run: one [`TimeSeriesRecord`] per grid step in
/// increasing time order.
#[derive(Debug, Clone)]
pub struct LabeledSeries {
    step: StepSize,
    records: Vec<TimeSeriesRecord>,
}

impl LabeledSeries {
    pub(crate) fn new(step: StepSize, records: Vec<TimeSeriesRecord>) -> Self {
        Self { step, records }
    }

    /// Grid step size the series was built at.
    pub fn step(&self) -> StepSize {
        self.step
    }

    /// All records in time order.
    pub fn records(&self) -> &[TimeSeriesRecord] {
        &self.records
    }

    /// Number of grid steps.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the series has no steps.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct event ids present in the series, ascending.
    pub fn event_ids(&self) -> Vec<EventId> {
        self.records
            .iter()
            .filter_map(|r| r.event_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Number of retained events.
    pub fn n_events(&self) -> usize {
        self.event_ids().len()
    }

    /// Records belonging to `id`, in time order.
    pub fn event_records(&self, id: EventId) -> impl Iterator<Item = &TimeSeriesRecord> {
        self.records.iter().filter(move |r| r.event_id == Some(id))
    }
}

//! Per-event summaries.

use chrono::NaiveDateTime;
use freshet_separation::{EventId, LabeledSeries};
use tracing::debug;

/// Summary of one flood-peak event.
#[derive(Debug, Clone, PartialEq)]
pub struct PeakEvent {
    /// Id shared with the labelled series.
    pub event_id: EventId,
    /// Timestamp of the first member step.
    pub start: NaiveDateTime,
    /// Timestamp of the last member step.
    pub end: NaiveDateTime,
    /// Sum of the member steps' hour deltas.
    pub duration_hours: f64,
    /// Total flow volume in m³.
    pub volume_m3: f64,
    /// Maximum gap-filled flow among member steps (m³/s).
    pub crest_flow: f64,
    /// Earliest timestamp at which `crest_flow` occurs.
    pub crest_time: NaiveDateTime,
    /// Hours from `start` to `crest_time`.
    pub time_to_peak_hours: f64,
}

impl PeakEvent {
    /// Volume in million m³.
    pub fn volume_mcm(&self) -> f64 {
        self.volume_m3 / 1e6
    }
}

/// Accumulates member steps of one event in time order.
struct EventBuilder {
    event_id: EventId,
    start: NaiveDateTime,
    end: NaiveDateTime,
    duration_hours: f64,
    volume_m3: f64,
    crest: Option<(f64, NaiveDateTime)>,
}

impl EventBuilder {
    fn new(event_id: EventId, start: NaiveDateTime) -> Self {
        Self {
            event_id,
            start,
            end: start,
            duration_hours: 0.0,
            volume_m3: 0.0,
            crest: None,
        }
    }

    fn push(&mut self, timestamp: NaiveDateTime, step_hours: f64, flow: Option<f64>, volume: Option<f64>) {
        self.end = timestamp;
        self.duration_hours += step_hours;
        self.volume_m3 += volume.unwrap_or(0.0);
        if let Some(q) = flow {
            // Strict comparison keeps the earliest step on ties.
            if self.crest.is_none_or(|(c, _)| q > c) {
                self.crest = Some((q, timestamp));
            }
        }
    }

    fn finish(self) -> Option<PeakEvent> {
        let Some((crest_flow, crest_time)) = self.crest else {
            debug!(event = %self.event_id, "skipping event without defined flow");
            return None;
        };
        Some(PeakEvent {
            event_id: self.event_id,
            start: self.start,
            end: self.end,
            duration_hours: self.duration_hours,
            volume_m3: self.volume_m3,
            crest_flow,
            crest_time,
            time_to_peak_hours: (crest_time - self.start).num_seconds() as f64 / 3600.0,
        })
    }
}

/// Summarises every retained event of a labeled series, ordered by event id.
///
/// Events made only of undefined-flow steps have no crest and are skipped.
#[tracing::instrument(skip_all, fields(n_steps = series.len()))]
pub fn summarize_events(series: &LabeledSeries) -> Vec<PeakEvent> {
    let mut builders: Vec<EventBuilder> = Vec::new();
    for r in series.records() {
        let Some(id) = r.event_id else { continue };
        // Ids increase in time order and events never interleave.
        if builders.last().is_none_or(|b| b.event_id != id) {
            builders.push(EventBuilder::new(id, r.timestamp));
        }
        if let Some(builder) = builders.last_mut() {
            builder.push(r.timestamp, r.step_hours, r.flow, r.volume_m3());
        }
    }

    let events: Vec<PeakEvent> = builders.into_iter().filter_map(EventBuilder::finish).collect();
    debug!(n_events = events.len(), "events summarised");
    events
}

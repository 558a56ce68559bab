//! CSV table writers.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::NaiveDateTime;
use freshet_events::{AnnualExtreme, PeakEvent};
use freshet_separation::{EventId, LabeledSeries};
use serde::Serialize;
use tracing::info;

use crate::error::IoError;

/// Timestamp format used in every written table.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn fmt_ts(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// One labeled step joined with its event summary.
#[derive(Serialize)]
struct SeriesRow {
    timestamp: String,
    step_hours: f64,
    raw_flow: Option<f64>,
    flow: Option<f64>,
    baseflow: Option<f64>,
    peakflow: Option<f64>,
    event_id: Option<u32>,
    volume_m3: Option<f64>,
    event_start: Option<String>,
    event_end: Option<String>,
    crest_flow: Option<f64>,
    crest_time: Option<String>,
    time_to_peak_hours: Option<f64>,
}

#[derive(Serialize)]
struct EventRow {
    event_id: u32,
    start: String,
    end: String,
    duration_hours: f64,
    volume_m3: f64,
    volume_mcm: f64,
    crest_flow: f64,
    crest_time: String,
    time_to_peak_hours: f64,
}

impl From<&PeakEvent> for EventRow {
    fn from(e: &PeakEvent) -> Self {
        Self {
            event_id: e.event_id.get(),
            start: fmt_ts(e.start),
            end: fmt_ts(e.end),
            duration_hours: e.duration_hours,
            volume_m3: e.volume_m3,
            volume_mcm: e.volume_mcm(),
            crest_flow: e.crest_flow,
            crest_time: fmt_ts(e.crest_time),
            time_to_peak_hours: e.time_to_peak_hours,
        }
    }
}

#[derive(Serialize)]
struct AnnualRow {
    year: i32,
    max_flow: f64,
    event_id: u32,
    duration_hours: f64,
    crest_flow: f64,
    volume_m3: f64,
    volume_mcm: f64,
    average_volume_rate: f64,
}

impl From<&AnnualExtreme> for AnnualRow {
    fn from(a: &AnnualExtreme) -> Self {
        Self {
            year: a.year,
            max_flow: a.max_flow,
            event_id: a.event_id.get(),
            duration_hours: a.duration_hours,
            crest_flow: a.crest_flow,
            volume_m3: a.volume_m3,
            volume_mcm: a.volume_mcm(),
            average_volume_rate: a.average_volume_rate(),
        }
    }
}

fn write_rows<W: Write, T: Serialize>(
    writer: W,
    rows: impl IntoIterator<Item = T>,
) -> Result<usize, IoError> {
    let mut wtr = csv::Writer::from_writer(writer);
    let mut n = 0;
    for row in rows {
        wtr.serialize(row)?;
        n += 1;
    }
    wtr.flush()?;
    Ok(n)
}

/// Write the labeled per-step table, each labeled step carrying its event's
/// start, end, crest and time-to-peak.
///
/// # Errors
///
/// Returns [`IoError::Io`] or [`IoError::Csv`] if writing fails.
pub fn write_series<W: Write>(
    writer: W,
    series: &LabeledSeries,
    events: &[PeakEvent],
) -> Result<usize, IoError> {
    let by_id: BTreeMap<EventId, &PeakEvent> = events.iter().map(|e| (e.event_id, e)).collect();
    let rows = series.records().iter().map(|r| {
        let event = r.event_id.and_then(|id| by_id.get(&id).copied());
        SeriesRow {
            timestamp: fmt_ts(r.timestamp),
            step_hours: r.step_hours,
            raw_flow: r.raw_flow,
            flow: r.flow,
            baseflow: r.baseflow,
            peakflow: r.peakflow,
            event_id: r.event_id.map(EventId::get),
            volume_m3: r.volume_m3(),
            event_start: event.map(|e| fmt_ts(e.start)),
            event_end: event.map(|e| fmt_ts(e.end)),
            crest_flow: event.map(|e| e.crest_flow),
            crest_time: event.map(|e| fmt_ts(e.crest_time)),
            time_to_peak_hours: event.map(|e| e.time_to_peak_hours),
        }
    });
    write_rows(writer, rows)
}

/// Write one row per peak event.
///
/// # Errors
///
/// Returns [`IoError::Io`] or [`IoError::Csv`] if writing fails.
pub fn write_events<W: Write>(writer: W, events: &[PeakEvent]) -> Result<usize, IoError> {
    write_rows(writer, events.iter().map(EventRow::from))
}

/// Write one row per year of the annual extreme table.
///
/// # Errors
///
/// Returns [`IoError::Io`] or [`IoError::Csv`] if writing fails.
pub fn write_annual<W: Write>(writer: W, annual: &[AnnualExtreme]) -> Result<usize, IoError> {
    write_rows(writer, annual.iter().map(AnnualRow::from))
}

/// Create `path` and pass it to `write`, logging the row count.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be created, or whatever
/// `write` returns.
pub fn write_file<F>(path: &Path, write: F) -> Result<(), IoError>
where
    F: FnOnce(File) -> Result<usize, IoError>,
{
    let n_rows = write(File::create(path)?)?;
    info!(path = %path.display(), n_rows, "wrote table");
    Ok(())
}

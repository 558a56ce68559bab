//! Integration test: CSV in, separation, tables out.

use std::fs;
use std::io::Write;

use approx::assert_relative_eq;
use freshet_events::{annual_extremes, summarize_events};
use freshet_io::{
    ReaderConfig, read_column, read_observations, write_annual, write_events, write_file,
    write_series,
};
use freshet_separation::{SeparationConfig, separate};
use freshet_series::StepSize;

fn gauge_csv(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("gauge.csv");
    let mut f = fs::File::create(&path).expect("create csv");
    writeln!(f, "timestamp,flow").unwrap();
    let flows = ["10", "10", "10", "20", "30", "", "30", "20", "10", "10"];
    for (h, q) in flows.iter().enumerate() {
        writeln!(f, "2018-04-02 {h:02}:00:00,{q}").unwrap();
    }
    path
}

#[test]
fn round_trip_tables() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = gauge_csv(&dir);

    let obs = read_observations(&input, &ReaderConfig::default()).expect("read");
    assert_eq!(obs.len(), 10);
    assert!(obs[5].flow().is_none());

    let config = SeparationConfig::new(100.0)
        .with_step(StepSize::SixtyMinutes)
        .with_max_gap_hours(Some(1.0));
    let series = separate(&obs, &config).expect("separate");
    let events = summarize_events(&series);
    let annual = annual_extremes(&series, &events);
    assert_eq!(events.len(), 1);

    let series_path = dir.path().join("series.csv");
    let events_path = dir.path().join("events.csv");
    let annual_path = dir.path().join("annual.csv");
    write_file(&series_path, |f| write_series(f, &series, &events)).expect("series");
    write_file(&events_path, |f| write_events(f, &events)).expect("events");
    write_file(&annual_path, |f| write_annual(f, &annual)).expect("annual");

    // Series: one row per grid step, event columns only on labeled steps.
    let mut rdr = csv::Reader::from_path(&series_path).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(&headers[0], "timestamp");
    assert_eq!(&headers[6], "event_id");
    assert_eq!(&headers[12], "time_to_peak_hours");
    let rows: Vec<csv::StringRecord> = rdr.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 10);
    assert_eq!(&rows[0][6], "");
    assert_eq!(&rows[4][6], "1");
    assert_eq!(&rows[4][8], "2018-04-02 03:00:00");
    // Gap step: no raw reading, filled flow.
    assert_eq!(&rows[5][2], "");
    assert_eq!(rows[5][3].parse::<f64>().unwrap(), 30.0);

    // Events and annual tables.
    let durations = read_column(&events_path, "duration_hours").unwrap();
    assert_eq!(durations, vec![5.0]);
    let max_flow = read_column(&annual_path, "max_flow").unwrap();
    assert_eq!(max_flow, vec![30.0]);
    let rate = read_column(&annual_path, "average_volume_rate").unwrap();
    assert_relative_eq!(rate[0], (20.0 + 30.0 + 30.0 + 30.0 + 20.0) / 5.0);
}

#[test]
fn read_column_skips_missing_cells() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("annual.csv");
    fs::write(&path, "year,peak\n2001,120.5\n2002,\n2003,99\n").unwrap();
    assert_eq!(read_column(&path, "peak").unwrap(), vec![120.5, 99.0]);
    assert!(read_column(&path, "volume").is_err());
}

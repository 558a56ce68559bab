//! CSV streamflow reader.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use freshet_series::Observation;
use tracing::{debug, info};

use crate::error::IoError;
use crate::validate::ValidationCollector;

/// Cell contents treated as a missing reading.
const MISSING_MARKERS: [&str; 5] = ["", "na", "nan", "null", "-"];

/// Configuration for reading `(timestamp, flow)` records from CSV.
///
/// Defaults: columns `timestamp` and `flow`, format `%Y-%m-%d %H:%M:%S`,
/// comma delimiter.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    timestamp_column: String,
    flow_column: String,
    timestamp_format: String,
    delimiter: u8,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            timestamp_column: "timestamp".into(),
            flow_column: "flow".into(),
            timestamp_format: "%Y-%m-%d %H:%M:%S".into(),
            delimiter: b',',
        }
    }
}

impl ReaderConfig {
    /// Set the timestamp column name.
    pub fn with_timestamp_column(mut self, name: impl Into<String>) -> Self {
        self.timestamp_column = name.into();
        self
    }

    /// Set the flow column name.
    pub fn with_flow_column(mut self, name: impl Into<String>) -> Self {
        self.flow_column = name.into();
        self
    }

    /// Set the `chrono` format of the timestamp column. A date-only format
    /// such as `%Y-%m-%d` reads each row at midnight.
    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn timestamp_column(&self) -> &str {
        &self.timestamp_column
    }

    pub fn flow_column(&self) -> &str {
        &self.flow_column
    }

    pub fn timestamp_format(&self) -> &str {
        &self.timestamp_format
    }

    /// Validate that column names and the timestamp format are set.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] listing every empty setting.
    pub fn validate(&self) -> Result<(), IoError> {
        let mut c = ValidationCollector::new();
        c.require_non_empty("timestamp_column", &self.timestamp_column);
        c.require_non_empty("flow_column", &self.flow_column);
        c.require_non_empty("timestamp_format", &self.timestamp_format);
        c.finish()
    }
}

/// Parses a number cell; missing markers give `None`.
pub(crate) fn parse_number(cell: &str, row: usize) -> Result<Option<f64>, IoError> {
    let cell = cell.trim();
    if MISSING_MARKERS.iter().any(|m| cell.eq_ignore_ascii_case(m)) {
        return Ok(None);
    }
    cell.parse::<f64>()
        .map(|v| v.is_finite().then_some(v))
        .map_err(|_| IoError::InvalidNumber {
            row,
            value: cell.to_string(),
        })
}

fn parse_timestamp(cell: &str, format: &str, row: usize) -> Result<NaiveDateTime, IoError> {
    let cell = cell.trim();
    NaiveDateTime::parse_from_str(cell, format)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(cell, format)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| IoError::InvalidTimestamp {
            row,
            value: cell.to_string(),
            format: format.to_string(),
        })
}

fn column_index(headers: &csv::StringRecord, name: &str, path: &Path) -> Result<usize, IoError> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| IoError::MissingColumn {
            name: name.to_string(),
            path: path.to_path_buf(),
        })
}

fn open(path: &Path) -> Result<File, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(File::open(path)?)
}

/// Read streamflow observations from a CSV file.
///
/// Empty cells and `NA`/`NaN`/`null`/`-` markers become missing readings;
/// rows are returned in file order.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `path` does not exist,
/// [`IoError::MissingColumn`] if a configured column is absent, and
/// [`IoError::InvalidTimestamp`] / [`IoError::InvalidNumber`] for
/// unparsable cells.
pub fn read_observations(path: &Path, config: &ReaderConfig) -> Result<Vec<Observation>, IoError> {
    config.validate()?;
    let observations = read_observations_from(open(path)?, path, config)?;
    info!(path = %path.display(), n = observations.len(), "read observations");
    Ok(observations)
}

/// Read observations from any reader; `source` is used in error messages.
///
/// # Errors
///
/// Same as [`read_observations`], apart from the file lookup.
pub fn read_observations_from<R: Read>(
    reader: R,
    source: &Path,
    config: &ReaderConfig,
) -> Result<Vec<Observation>, IoError> {
    config.validate()?;
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let ts_idx = column_index(&headers, &config.timestamp_column, source)?;
    let flow_idx = column_index(&headers, &config.flow_column, source)?;

    let mut observations = Vec::new();
    let mut n_missing = 0usize;
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let row = i + 1;
        let timestamp = parse_timestamp(
            record.get(ts_idx).unwrap_or_default(),
            &config.timestamp_format,
            row,
        )?;
        let flow = parse_number(record.get(flow_idx).unwrap_or_default(), row)?;
        if flow.is_none() {
            n_missing += 1;
        }
        observations.push(Observation::from((timestamp, flow)));
    }
    debug!(n_rows = observations.len(), n_missing, "parsed csv");
    Ok(observations)
}

/// Read one numeric column, skipping missing cells.
///
/// Used for samples of annual extremes.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`], [`IoError::MissingColumn`] or
/// [`IoError::InvalidNumber`].
pub fn read_column(path: &Path, column: &str) -> Result<Vec<f64>, IoError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(open(path)?);
    let headers = rdr.headers()?.clone();
    let idx = column_index(&headers, column, path)?;

    let mut values = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        if let Some(v) = parse_number(record.get(idx).unwrap_or_default(), i + 1)? {
            values.push(v);
        }
    }
    debug!(path = %path.display(), column, n = values.len(), "read column");
    Ok(values)
}

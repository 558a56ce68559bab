use std::path::PathBuf;

use serde::Deserialize;

/// Top-level freshet configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FreshetConfig {
    /// I/O settings.
    #[serde(default)]
    pub io: IoToml,

    /// Catchment parameters.
    pub catchment: CatchmentToml,

    /// Grid, interpolation and peak filtering settings.
    #[serde(default)]
    pub separation: SeparationToml,

    /// Return-period curve settings.
    #[serde(default)]
    pub frequency: FrequencyToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    pub input: Option<PathBuf>,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_timestamp_column")]
    pub timestamp_column: String,
    #[serde(default = "default_flow_column")]
    pub flow_column: String,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            input: None,
            output_dir: default_output_dir(),
            timestamp_column: default_timestamp_column(),
            flow_column: default_flow_column(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}
fn default_timestamp_column() -> String {
    "timestamp".to_string()
}
fn default_flow_column() -> String {
    "flow".to_string()
}
fn default_timestamp_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatchmentToml {
    pub area_km2: f64,
    #[serde(default = "default_recession_k")]
    pub recession_k: f64,
}

fn default_recession_k() -> f64 {
    freshet_separation::DEFAULT_RECESSION_K
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeparationToml {
    #[serde(default = "default_step_minutes")]
    pub step_minutes: u32,
    #[serde(default)]
    pub max_gap_hours: Option<f64>,
    #[serde(default)]
    pub min_peak_hours: Option<f64>,
}

impl Default for SeparationToml {
    fn default() -> Self {
        Self {
            step_minutes: default_step_minutes(),
            max_gap_hours: None,
            min_peak_hours: None,
        }
    }
}

fn default_step_minutes() -> u32 {
    15
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrequencyToml {
    #[serde(default = "default_max_return_period")]
    pub max_return_period: f64,
    #[serde(default = "default_n_points")]
    pub n_points: usize,
}

impl Default for FrequencyToml {
    fn default() -> Self {
        Self {
            max_return_period: default_max_return_period(),
            n_points: default_n_points(),
        }
    }
}

fn default_max_return_period() -> f64 {
    100.0
}
fn default_n_points() -> usize {
    freshet_gev::DEFAULT_N_POINTS
}

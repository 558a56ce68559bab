//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result};

use freshet_gev::FrequencyConfig;
use freshet_io::ReaderConfig;
use freshet_separation::SeparationConfig;
use freshet_series::StepSize;

use crate::config::*;

/// Builds a [`ReaderConfig`] from the TOML I/O configuration.
pub fn build_reader_config(io: &IoToml) -> Result<ReaderConfig> {
    let cfg = ReaderConfig::default()
        .with_timestamp_column(&io.timestamp_column)
        .with_flow_column(&io.flow_column)
        .with_timestamp_format(&io.timestamp_format);
    cfg.validate().context("invalid [io] configuration")?;
    Ok(cfg)
}

/// Builds a [`SeparationConfig`] from the catchment and separation sections.
pub fn build_separation_config(
    catchment: &CatchmentToml,
    separation: &SeparationToml,
) -> Result<SeparationConfig> {
    let step = StepSize::from_minutes(separation.step_minutes)
        .context("invalid [separation].step_minutes")?;
    let cfg = SeparationConfig::new(catchment.area_km2)
        .with_recession_k(catchment.recession_k)
        .with_step(step)
        .with_max_gap_hours(separation.max_gap_hours)
        .with_min_peak_hours(separation.min_peak_hours);
    cfg.validate()
        .context("invalid [catchment] or [separation] configuration")?;
    Ok(cfg)
}

/// Builds a [`FrequencyConfig`], letting `max_return_period` override the file.
pub fn build_frequency_config(
    frequency: &FrequencyToml,
    max_return_period: Option<f64>,
) -> Result<FrequencyConfig> {
    let cfg = FrequencyConfig::new(max_return_period.unwrap_or(frequency.max_return_period))
        .with_n_points(frequency.n_points);
    cfg.validate().context("invalid [frequency] configuration")?;
    Ok(cfg)
}

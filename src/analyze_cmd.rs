//! Analyze command: separation, peak events, annual extremes and GEV fits.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use freshet_events::{annual_extremes, summarize_events};
use freshet_gev::{FrequencyConfig, fit_gev};
use freshet_io::{read_observations, write_annual, write_events, write_file, write_series};
use freshet_separation::separate;

use crate::cli::AnalyzeArgs;
use crate::config::FreshetConfig;
use crate::convert;
use crate::report::{FrequencyReport, SeriesReport, empty_report, series_report, to_json};

/// Run the full analysis pipeline.
pub fn run(args: AnalyzeArgs) -> Result<()> {
    let _cmd = info_span!("analyze").entered();
    // 1. Load project TOML
    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let mut config: FreshetConfig =
        toml::from_str(&toml_str).context("failed to parse TOML config")?;

    // 2. Merge CLI overrides
    if let Some(input) = args.input {
        config.io.input = Some(input);
    }
    if let Some(dir) = args.output_dir {
        config.io.output_dir = dir;
    }

    analyze(&config, args.max_return_period)
}

/// Runs the pipeline for an already loaded configuration.
pub fn analyze(config: &FreshetConfig, max_return_period: Option<f64>) -> Result<()> {
    let reader_cfg = convert::build_reader_config(&config.io)?;
    let separation_cfg = convert::build_separation_config(&config.catchment, &config.separation)?;
    let frequency_cfg = convert::build_frequency_config(&config.frequency, max_return_period)?;

    let input = config.io.input.as_ref().ok_or_else(|| {
        anyhow::anyhow!("no input path: set [io].input in config or use --input")
    })?;

    // 3. Read observations
    info!(path = %input.display(), "reading streamflow record");
    let observations = read_observations(input, &reader_cfg)
        .with_context(|| format!("failed to read CSV: {}", input.display()))?;

    // 4. Separate and label
    let series = separate(&observations, &separation_cfg).context("baseflow separation failed")?;
    let events = summarize_events(&series);
    let annual = annual_extremes(&series, &events);
    info!(
        n_steps = series.len(),
        n_events = events.len(),
        n_years = annual.len(),
        "peak events labelled"
    );

    // 5. Write tables
    let out = &config.io.output_dir;
    std::fs::create_dir_all(out)
        .with_context(|| format!("failed to create output directory: {}", out.display()))?;
    write_table(&out.join("series.csv"), |f| write_series(f, &series, &events))?;
    write_table(&out.join("events.csv"), |f| write_events(f, &events))?;
    write_table(&out.join("annual.csv"), |f| write_annual(f, &annual))?;

    // 6. Fit both annual series
    let years: Vec<i32> = annual.iter().map(|a| a.year).collect();
    let max_flow: Vec<f64> = annual.iter().map(|a| a.max_flow).collect();
    let volume_mcm: Vec<f64> = annual.iter().map(|a| a.volume_mcm()).collect();

    let report = FrequencyReport {
        max_return_period: frequency_cfg.max_return_period(),
        series: vec![
            annual_report("max_flow", "m3/s", &max_flow, &years, &frequency_cfg)?,
            annual_report("max_volume", "MCM", &volume_mcm, &years, &frequency_cfg)?,
        ],
    };

    // 7. Write frequency JSON
    let json_path = out.join("frequency.json");
    std::fs::write(&json_path, to_json(&report)?)
        .with_context(|| format!("failed to write report: {}", json_path.display()))?;
    info!(path = %json_path.display(), "frequency report written");

    Ok(())
}

/// A record without peak events has no annual sample; that is reported, not fitted.
fn annual_report(
    name: &str,
    unit: &str,
    sample: &[f64],
    years: &[i32],
    config: &FrequencyConfig,
) -> Result<SeriesReport> {
    if sample.is_empty() {
        warn!(series = name, "no peak events in record, skipping GEV fit");
        return Ok(empty_report(name, unit));
    }
    series_report(name, unit, sample, Some(years), fit_gev(sample, config))
}

fn write_table<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(std::fs::File) -> Result<usize, freshet_io::IoError>,
{
    write_file(path, write).with_context(|| format!("failed to write {}", path.display()))
}

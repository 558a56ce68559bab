//! Fit command: GEV fit of an existing annual-extreme column.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use freshet_gev::{FrequencyConfig, fit_gev};
use freshet_io::read_column;

use crate::cli::FitArgs;
use crate::report::{FrequencyReport, series_report, to_json};

/// Fit a GEV distribution to one CSV column and write the frequency report.
pub fn run(args: FitArgs) -> Result<()> {
    let _cmd = info_span!("fit").entered();
    let frequency_cfg =
        FrequencyConfig::new(args.max_return_period).with_n_points(args.n_points);
    frequency_cfg
        .validate()
        .context("invalid return-period settings")?;

    info!(path = %args.input.display(), column = %args.column, "reading annual extremes");
    let sample = read_column(&args.input, &args.column)
        .with_context(|| format!("failed to read CSV: {}", args.input.display()))?;

    let fit = fit_gev(&sample, &frequency_cfg);
    let report = FrequencyReport {
        max_return_period: frequency_cfg.max_return_period(),
        series: vec![series_report(&args.column, "", &sample, None, fit)?],
    };

    let path = args
        .output
        .unwrap_or_else(|| args.input.with_extension("frequency.json"));
    std::fs::write(&path, to_json(&report)?)
        .with_context(|| format!("failed to write report: {}", path.display()))?;
    info!(path = %path.display(), "frequency report written");

    Ok(())
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Freshet flood-peak and flood-frequency analysis.
#[derive(Parser)]
#[command(
    name = "freshet",
    version,
    about = "Baseflow separation, flood-peak events and GEV flood frequency analysis"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Separate a streamflow record, label peaks and fit annual extremes.
    Analyze(AnalyzeArgs),
    /// Fit a GEV distribution to a column of annual extremes.
    Fit(FitArgs),
}

/// Arguments for the `analyze` subcommand.
#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "freshet.toml")]
    pub config: PathBuf,

    /// Override input CSV path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override output directory from config.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Override the largest return period (years) of the fitted curves.
    #[arg(long)]
    pub max_return_period: Option<f64>,
}

/// Arguments for the `fit` subcommand.
#[derive(clap::Args)]
pub struct FitArgs {
    /// CSV file holding one annual extreme per row.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Column to fit.
    #[arg(long, default_value = "max_flow")]
    pub column: String,

    /// Path for the frequency JSON report (default: <input>.frequency.json).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Largest return period (years) of the fitted curve.
    #[arg(long, default_value_t = 100.0)]
    pub max_return_period: f64,

    /// Number of points on the return-period grid.
    #[arg(long, default_value_t = freshet_gev::DEFAULT_N_POINTS)]
    pub n_points: usize,
}

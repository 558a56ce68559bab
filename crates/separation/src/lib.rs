//! # freshet-separation
//!
//! Recession-slope baseflow separation and flood-peak labelling.
//!
//! A straight baseflow line is launched from the pre-rise flow whenever the
//! hydrograph rises faster than the catchment recession slope `k × A`, and
//! is followed until it meets the hydrograph again. Flow above the line is
//! peakflow; every contiguous run of positive peakflow becomes one event.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Vec of Observation"] -->|"build_grid + interpolate"| B["FlowGrid"]
//!     B -->|"separate_baseflow"| C["baseflow"]
//!     C -->|"flow - baseflow"| D["peakflow"]
//!     D -->|"label_peaks"| E["event ids"]
//!     E -->|"drop_short_events"| F["LabeledSeries"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use freshet_separation::{SeparationConfig, separate};
//!
//! let config = SeparationConfig::new(1461.0).with_max_gap_hours(Some(12.0));
//! let series = separate(&observations, &config)?;
//! for id in series.event_ids() {
//!     println!("event {id}: {} steps", series.event_records(id).count());
//! }
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `config` | Catchment parameters and filtering bounds |
//! | `baseflow` | Forward-pass recession-line separator |
//! | `label` | Event labelling sweep |
//! | `duration` | Minimum-duration event filter |
//! | `record` | Per-step output records |
//! | `error` | Error types |

mod baseflow;
mod config;
mod duration;
mod error;
mod label;
mod record;

pub use config::{DEFAULT_RECESSION_K, SeparationConfig};
pub use error::SeparationError;
pub use record::{EventId, LabeledSeries, TimeSeriesRecord};

use freshet_series::{FlowGrid, Observation, build_grid};
use tracing::debug;

use crate::baseflow::separate_baseflow;
use crate::duration::drop_short_events;
use crate::label::{Peakflow, label_peaks};

/// Runs the full pipeline on raw observations: grid construction, gap
/// filling, baseflow separation, labelling and duration filtering.
///
/// # Errors
///
/// Returns [`SeparationError::InvalidConfig`] if the configuration is
/// invalid and [`SeparationError::Series`] if the observations cannot be
/// placed on a grid (empty input, negative flow).
#[tracing::instrument(skip(observations, config), fields(n_obs = observations.len()))]
pub fn separate(
    observations: &[Observation],
    config: &SeparationConfig,
) -> Result<LabeledSeries, SeparationError> {
    config.validate()?;
    let grid = build_grid(observations, config.step())?.interpolate(config.max_gap_hours())?;
    separate_grid(&grid, config)
}

/// Separates and labels an already gap-filled grid.
///
/// Only the catchment slope and the minimum peak duration are read from
/// `config`; the grid keeps its own step size and fill state.
///
/// # Errors
///
/// Returns [`SeparationError::InvalidConfig`] if the configuration is invalid.
pub fn separate_grid(
    grid: &FlowGrid,
    config: &SeparationConfig,
) -> Result<LabeledSeries, SeparationError> {
    config.validate()?;

    let flow = grid.interpolated();
    let step_hours = grid.step_hours();
    let baseflow = separate_baseflow(flow, grid.raw(), step_hours, config.slope());

    let peakflow: Vec<Option<f64>> = flow
        .iter()
        .zip(&baseflow)
        .map(|(&q, &b)| Some(q? - b?))
        .collect();

    let sweep: Vec<Peakflow> = peakflow.iter().copied().map(Peakflow::from).collect();
    let mut labels = label_peaks(&sweep);

    if let Some(min_hours) = config.min_peak_hours() {
        let removed = drop_short_events(&mut labels, step_hours, min_hours);
        if !removed.is_empty() {
            debug!(n_removed = removed.len(), min_hours, "short peaks removed");
        }
    }

    let records: Vec<TimeSeriesRecord> = grid
        .timestamps()
        .iter()
        .enumerate()
        .map(|(i, &timestamp)| TimeSeriesRecord {
            timestamp,
            step_hours: step_hours[i],
            raw_flow: grid.raw()[i],
            flow: flow[i],
            baseflow: baseflow[i],
            peakflow: labels[i].and(peakflow[i]),
            event_id: labels[i],
        })
        .collect();

    let series = LabeledSeries::new(grid.step(), records);
    debug!(n_steps = series.len(), n_events = series.n_events(), "separation complete");
    Ok(series)
}

//! Uniform time grid built over an irregular observation record.

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::error::SeriesError;
use crate::interpolate::fill_gaps;
use crate::observation::Observation;
use crate::step::StepSize;

/// Flow record resampled onto a uniform grid.
///
/// The grid spans the earliest to the latest observation at a fixed
/// [`StepSize`]. Each step carries the hours elapsed since the previous step
/// (zero for the first), the raw observed flow and the gap-filled flow.
///
/// Built by [`build_grid`]; gap filling is applied with
/// [`FlowGrid::interpolate`].
#[derive(Debug, Clone)]
pub struct FlowGrid {
    step: StepSize,
    timestamps: Vec<NaiveDateTime>,
    step_hours: Vec<f64>,
    raw: Vec<Option<f64>>,
    interpolated: Vec<Option<f64>>,
}

impl FlowGrid {
    /// Fills missing flow values by linear interpolation in time.
    ///
    /// With `max_gap_hours = Some(h)` only runs of at most
    /// `floor(h × steps_per_hour)` missing steps are filled; longer runs stay
    /// missing. With `None` every interior gap is filled. Gaps at the start
    /// or end of the record are never filled.
    ///
    /// Interpolation always starts from the raw flow, so calling this twice
    /// with different bounds does not compound.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::InvalidGapBound`] if `max_gap_hours` is not
    /// finite and positive.
    #[tracing::instrument(skip(self), fields(n_steps = self.len()))]
    pub fn interpolate(mut self, max_gap_hours: Option<f64>) -> Result<Self, SeriesError> {
        let max_gap_steps = match max_gap_hours {
            Some(hours) if !hours.is_finite() || hours <= 0.0 => {
                return Err(SeriesError::InvalidGapBound { hours });
            }
            Some(hours) => Some(self.step.steps_within(hours)),
            None => None,
        };

        self.interpolated = fill_gaps(&self.timestamps, &self.raw, max_gap_steps);

        let n_raw_missing = self.raw.iter().filter(|v| v.is_none()).count();
        let n_left_missing = self.interpolated.iter().filter(|v| v.is_none()).count();
        debug!(
            ?max_gap_steps,
            filled = n_raw_missing - n_left_missing,
            unfilled = n_left_missing,
            "gap interpolation complete"
        );
        Ok(self)
    }

    /// The grid step size.
    pub fn step(&self) -> StepSize {
        self.step
    }

    /// Number of grid steps.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Returns `true` if the grid has no steps.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Grid timestamps, strictly increasing.
    pub fn timestamps(&self) -> &[NaiveDateTime] {
        &self.timestamps
    }

    /// Hours since the previous step; the first entry is zero.
    pub fn step_hours(&self) -> &[f64] {
        &self.step_hours
    }

    /// Observed flow aligned to the grid.
    pub fn raw(&self) -> &[Option<f64>] {
        &self.raw
    }

    /// Gap-filled flow. Equal to [`FlowGrid::raw`] until
    /// [`FlowGrid::interpolate`] has been applied.
    pub fn interpolated(&self) -> &[Option<f64>] {
        &self.interpolated
    }
}

/// Builds a uniform grid over `observations` at the given step.
///
/// The grid starts at the earliest observation and advances by `step` up to
/// and including the latest observation. Observations are matched to grid
/// steps by exact timestamp; readings between grid steps are dropped, and
/// for duplicated timestamps the first reading in input order wins.
///
/// Input order does not matter.
///
/// # Errors
///
/// Returns [`SeriesError::EmptyObservations`] for an empty input and
/// [`SeriesError::NegativeFlow`] if any reading is negative.
#[tracing::instrument(skip(observations, step), fields(n_obs = observations.len(), step = %step))]
pub fn build_grid(observations: &[Observation], step: StepSize) -> Result<FlowGrid, SeriesError> {
    if observations.is_empty() {
        return Err(SeriesError::EmptyObservations);
    }
    if let Some(bad) = observations
        .iter()
        .find(|o| o.flow().is_some_and(|f| f < 0.0))
    {
        return Err(SeriesError::NegativeFlow {
            timestamp: bad.timestamp(),
            flow: bad.flow().unwrap_or_default(),
        });
    }

    let start = observations
        .iter()
        .map(Observation::timestamp)
        .min()
        .ok_or(SeriesError::EmptyObservations)?;
    let end = observations
        .iter()
        .map(Observation::timestamp)
        .max()
        .ok_or(SeriesError::EmptyObservations)?;

    let step_seconds = step.duration().num_seconds();
    let n_steps = ((end - start).num_seconds() / step_seconds) as usize + 1;

    let timestamps: Vec<NaiveDateTime> = (0..n_steps)
        .map(|i| start + step.duration() * i as i32)
        .collect();
    let step_hours: Vec<f64> = std::iter::once(0.0)
        .chain(timestamps.windows(2).map(|w| (w[1] - w[0]).num_seconds() as f64 / 3600.0))
        .collect();

    let mut raw = vec![None; n_steps];
    let mut seen = vec![false; n_steps];
    let mut off_grid = 0usize;
    let mut duplicates = 0usize;
    for obs in observations {
        let offset = (obs.timestamp() - start).num_seconds();
        if offset % step_seconds != 0 {
            off_grid += 1;
            continue;
        }
        let idx = (offset / step_seconds) as usize;
        if std::mem::replace(&mut seen[idx], true) {
            duplicates += 1;
            continue;
        }
        raw[idx] = obs.flow();
    }

    if off_grid > 0 {
        warn!(
            off_grid,
            "observations not aligned to the {step} grid were dropped"
        );
    }
    if duplicates > 0 {
        debug!(duplicates, "duplicate timestamps ignored (first reading kept)");
    }
    debug!(n_steps, %start, %end, "time grid built");

    Ok(FlowGrid {
        step,
        timestamps,
        step_hours,
        interpolated: raw.clone(),
        raw,
    })
}

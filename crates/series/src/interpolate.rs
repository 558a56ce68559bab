//! Bounded, time-weighted linear gap filling.

use chrono::NaiveDateTime;

/// Fills interior runs of missing values by linear interpolation in time.
///
/// A run is filled only when it has a defined value on both sides and, if
/// `max_gap_steps` is given, is at most that many steps long. Longer runs
/// and runs touching either end of the series are left as `None`.
///
/// `timestamps` and `values` must have equal length.
pub(crate) fn fill_gaps(
    timestamps: &[NaiveDateTime],
    values: &[Option<f64>],
    max_gap_steps: Option<usize>,
) -> Vec<Option<f64>> {
    debug_assert_eq!(timestamps.len(), values.len());
    let mut filled = values.to_vec();
    let n = values.len();

    let mut i = 0;
    while i < n {
        if values[i].is_some() {
            i += 1;
            continue;
        }
        let start = i;
        while i < n && values[i].is_none() {
            i += 1;
        }
        let run = i - start;

        let (Some(left), Some(right)) = (
            start.checked_sub(1).and_then(|l| values[l].map(|v| (l, v))),
            values.get(i).copied().flatten().map(|v| (i, v)),
        ) else {
            continue;
        };
        if max_gap_steps.is_some_and(|limit| run > limit) {
            continue;
        }

        let (l, v0) = left;
        let (r, v1) = right;
        let t0 = timestamps[l];
        let span = (timestamps[r] - t0).num_seconds() as f64;
        for (j, slot) in filled.iter_mut().enumerate().take(r).skip(start) {
            let frac = (timestamps[j] - t0).num_seconds() as f64 / span;
            *slot = Some(v0 + (v1 - v0) * frac);
        }
    }

    filled
}

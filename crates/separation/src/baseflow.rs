//! Recession-slope baseflow separation.
//!
//! A straight line of slope `k × A` is projected forward from the last flow
//! before a detected rising limb and used as baseflow until the hydrograph
//! falls back below it.

/// Running state of the forward sweep.
///
/// `threshold` is the flow at the step before the current rising limb; while
/// it is `None` the sweep is watching for a new rise.
#[derive(Debug, Clone, Copy, Default)]
struct SeparatorState {
    threshold: Option<f64>,
    elapsed_hours: f64,
}

impl SeparatorState {
    fn watching(&self) -> bool {
        self.threshold.is_none()
    }

    /// Advances one step and returns the unclamped baseflow for it.
    ///
    /// An undefined `flow` yields an undefined baseflow, but the separation
    /// line keeps advancing through the gap.
    fn advance(&mut self, flow: Option<f64>, prev: Option<f64>, dt: f64, slope: f64) -> Option<f64> {
        if let (Some(q), Some(q_prev)) = (flow, prev) {
            if self.watching() && q > q_prev + slope * dt {
                self.threshold = Some(q_prev);
                self.elapsed_hours = 0.0;
            }
        }

        let line = match self.threshold {
            Some(threshold) => {
                self.elapsed_hours += dt;
                Some(threshold + slope * self.elapsed_hours)
            }
            None => None,
        };

        let q = flow?;
        let candidate = line.unwrap_or(q);
        if candidate > q {
            // Recession has met the hydrograph again.
            self.threshold = None;
            self.elapsed_hours = 0.0;
        }
        Some(candidate.min(q))
    }
}

/// Computes baseflow for every step in one forward pass.
///
/// `flow` is the gap-filled series, `raw` the observed series used as a
/// second upper clamp, `step_hours` the per-step time deltas and `slope` the
/// line gradient `k × A` per hour. All slices share one length.
pub(crate) fn separate_baseflow(
    flow: &[Option<f64>],
    raw: &[Option<f64>],
    step_hours: &[f64],
    slope: f64,
) -> Vec<Option<f64>> {
    debug_assert_eq!(flow.len(), raw.len());
    debug_assert_eq!(flow.len(), step_hours.len());

    let mut state = SeparatorState::default();
    flow.iter()
        .zip(raw)
        .zip(step_hours)
        .enumerate()
        .map(|(i, ((&q, &q_raw), &dt))| {
            let base = if i == 0 {
                q
            } else {
                state.advance(q, flow[i - 1], dt, slope)
            };
            match (base, q_raw) {
                (Some(b), Some(r)) => Some(b.min(r)),
                (b, _) => b,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn run(flow: &[f64], slope: f64) -> Vec<f64> {
        let flow: Vec<Option<f64>> = flow.iter().copied().map(Some).collect();
        let dt: Vec<f64> = (0..flow.len()).map(|i| if i == 0 { 0.0 } else { 1.0 }).collect();
        separate_baseflow(&flow, &flow, &dt, slope)
            .into_iter()
            .map(|b| b.unwrap())
            .collect()
    }

    #[test]
    fn flat_series_baseflow_equals_flow() {
        let base = run(&[5.0; 10], 0.1);
        assert!(base.iter().all(|&b| b == 5.0));
    }

    #[test]
    fn small_rise_below_slope_is_not_an_event() {
        let base = run(&[5.0, 5.05, 5.1, 5.15], 0.1);
        assert_eq!(base, vec![5.0, 5.05, 5.1, 5.15]);
    }

    #[test]
    fn line_rises_from_pre_event_flow() {
        let base = run(&[10.0, 20.0, 30.0, 20.0, 10.0, 10.0], 0.5);
        assert_relative_eq!(base[1], 10.5);
        assert_relative_eq!(base[2], 11.0);
        assert_relative_eq!(base[3], 11.5);
        assert_relative_eq!(base[4], 10.0); // line 12.0 crosses flow 10.0
        assert_relative_eq!(base[5], 10.0);
    }

    #[test]
    fn new_rise_detected_after_reintersection() {
        let base = run(&[10.0, 20.0, 9.0, 30.0, 9.0], 1.0);
        assert_relative_eq!(base[1], 11.0);
        assert_relative_eq!(base[2], 9.0);
        // Second rise starts from 9.0.
        assert_relative_eq!(base[3], 10.0);
        assert_relative_eq!(base[4], 9.0);
    }

    #[test]
    fn zero_threshold_is_a_real_threshold() {
        let base = run(&[0.0, 10.0, 10.0], 1.0);
        assert_relative_eq!(base[1], 1.0);
        assert_relative_eq!(base[2], 2.0);
    }

    #[test]
    fn gap_gives_undefined_baseflow_and_line_keeps_moving() {
        let flow = [Some(10.0), Some(20.0), None, Some(20.0)];
        let dt = [0.0, 1.0, 1.0, 1.0];
        let base = separate_baseflow(&flow, &flow, &dt, 1.0);
        assert_relative_eq!(base[1].unwrap(), 11.0);
        assert!(base[2].is_none());
        assert_relative_eq!(base[3].unwrap(), 13.0);
    }

    #[test]
    fn raw_flow_clamps_baseflow() {
        let flow = [Some(10.0), Some(10.0)];
        let raw = [Some(10.0), Some(8.0)];
        let base = separate_baseflow(&flow, &raw, &[0.0, 1.0], 1.0);
        assert_relative_eq!(base[1].unwrap(), 8.0);
    }

    #[test]
    fn baseflow_never_exceeds_flow() {
        let flow = [3.0, 8.0, 2.0, 15.0, 14.0, 1.0, 0.5, 20.0, 0.0, 4.0];
        let base = run(&flow, 0.3);
        for (b, q) in base.iter().zip(flow.iter()) {
            assert!(b <= q && *b >= 0.0, "baseflow {b} vs flow {q}");
        }
    }
}

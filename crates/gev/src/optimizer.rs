//! Nelder-Mead maximum-likelihood estimation of GEV parameters.
//!
//! Minimises the negative log-likelihood over `(c, loc, ln scale)` so the
//! scale stays positive without constraints.
//!
//! **Not part of the public API.**

use argmin::core::{CostFunction, Executor};
use argmin::solver::neldermead::NelderMead;
use statrs::consts::EULER_MASCHERONI;
use statrs::statistics::Statistics;
use tracing::{debug, warn};

use crate::error::GevError;
use crate::params::GevParams;

/// Number of solver runs; each restart begins from the previous optimum.
const N_RUNS: usize = 3;
const MAX_ITERS: u64 = 2000;

/// Gumbel method-of-moments starting point with zero shape.
fn initial_guess(sample: &[f64]) -> [f64; 3] {
    let mean = sample.iter().mean();
    let sd = sample.iter().std_dev();
    let scale = sd * 6.0_f64.sqrt() / std::f64::consts::PI;
    let loc = mean - EULER_MASCHERONI * scale;
    [0.0, loc, scale.ln()]
}

fn simplex_around(x0: [f64; 3], loc_step: f64) -> Vec<Vec<f64>> {
    let origin = x0.to_vec();
    let mut simplex = vec![origin.clone()];
    for (i, step) in [0.1, loc_step, 0.2].into_iter().enumerate() {
        let mut vertex = origin.clone();
        vertex[i] += step;
        simplex.push(vertex);
    }
    simplex
}

fn to_params(x: &[f64]) -> Option<GevParams> {
    GevParams::new(x[0], x[1], x[2].exp())
}

/// Fits GEV parameters by maximum likelihood.
///
/// The sample must already be validated (non-empty, finite, at least three
/// distinct values).
pub(crate) fn fit_params(sample: &[f64]) -> Result<(GevParams, f64), GevError> {
    let x0 = initial_guess(sample);
    let loc_step = 0.5 * x0[2].exp();

    let mut best: Option<(Vec<f64>, f64)> = None;
    let mut start = x0;
    for run in 0..N_RUNS {
        let solver = NelderMead::new(simplex_around(start, loc_step))
            .with_sd_tolerance(1e-10)
            .map_err(|_| GevError::OptimizationFailed)?;
        let result = match Executor::new(GevCost { sample }, solver)
            .configure(|state| state.max_iters(MAX_ITERS))
            .run()
        {
            Ok(result) => result,
            Err(e) => {
                warn!(run, error = %e, "GEV likelihood run failed");
                continue;
            }
        };
        let state = result.state();
        let Some(param) = state.best_param.clone() else {
            continue;
        };
        let nll = state.best_cost;
        debug!(run, nll, iters = state.iter, "GEV likelihood run");
        if best.as_ref().is_none_or(|(_, b)| nll < *b) {
            best = Some((param, nll));
        }
        if let Some((p, _)) = &best {
            start = [p[0], p[1], p[2]];
        }
    }

    let (param, nll) = best.ok_or(GevError::OptimizationFailed)?;
    if nll >= f64::MAX || !nll.is_finite() {
        return Err(GevError::OptimizationFailed);
    }
    let params = to_params(&param).ok_or(GevError::OptimizationFailed)?;
    Ok((params, -nll))
}

/// Cost function for argmin: negative log-likelihood.
struct GevCost<'a> {
    sample: &'a [f64],
}

impl CostFunction for GevCost<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, x: &Self::Param) -> Result<Self::Output, argmin::core::Error> {
        let ll = to_params(x).map_or(f64::NEG_INFINITY, |p| p.log_likelihood(self.sample));
        if ll.is_finite() { Ok(-ll) } else { Ok(f64::MAX) }
    }
}

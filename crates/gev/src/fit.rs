//! GEV fit results and the fitting entry point.

use tracing::debug;

use crate::config::FrequencyConfig;
use crate::curve::ReturnPeriodCurve;
use crate::error::GevError;
use crate::optimizer;
use crate::params::GevParams;

/// Minimum number of distinct sample values for a three-parameter fit.
pub const MIN_DISTINCT: usize = 3;

/// A fitted GEV distribution and its return-period curve.
///
/// ```mermaid
/// graph LR
///     A["&[f64] annual maxima"] -->|"fit_gev(&sample, &config)?"| B["GevFit"]
///     B --> C[".params()"]
///     B --> D[".curve()"]
///     B --> E[".return_level(t)"]
/// ```
#[derive(Debug, Clone)]
pub struct GevFit {
    params: GevParams,
    log_likelihood: f64,
    n: usize,
    curve: ReturnPeriodCurve,
}

impl GevFit {
    /// Fitted parameters.
    pub fn params(&self) -> &GevParams {
        &self.params
    }

    /// Log-likelihood at the fitted parameters.
    pub fn log_likelihood(&self) -> f64 {
        self.log_likelihood
    }

    /// Sample size.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Quantile curve over the configured return-period grid.
    pub fn curve(&self) -> &ReturnPeriodCurve {
        &self.curve
    }

    /// Quantile with return period `t` years, `quantile(1 - 1/t)`.
    pub fn return_level(&self, t: f64) -> f64 {
        self.params.quantile(1.0 - 1.0 / t)
    }
}

fn validate_sample(sample: &[f64]) -> Result<(), GevError> {
    if sample.is_empty() {
        return Err(GevError::EmptySample);
    }
    if sample.iter().any(|x| !x.is_finite()) {
        return Err(GevError::NonFiniteSample);
    }
    let mut sorted = sample.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted.dedup();
    match sorted.len() {
        1 => Err(GevError::ConstantSample),
        n if n < MIN_DISTINCT => Err(GevError::TooFewDistinct {
            distinct: n,
            min: MIN_DISTINCT,
        }),
        _ => Ok(()),
    }
}

/// Fits a GEV distribution to `sample` by maximum likelihood and evaluates
/// it on the return-period grid of `config`.
///
/// The optimiser starts from zero shape with Gumbel moment estimates for
/// location and scale.
///
/// # Errors
///
/// - [`GevError::InvalidConfig`] if `config` is invalid.
/// - [`GevError::EmptySample`] / [`GevError::NonFiniteSample`] for invalid input.
/// - [`GevError::ConstantSample`] / [`GevError::TooFewDistinct`] for
///   degenerate samples.
/// - [`GevError::OptimizationFailed`] if no finite likelihood optimum is found.
#[tracing::instrument(skip_all, fields(n = sample.len(), t_max = config.max_return_period()))]
pub fn fit_gev(sample: &[f64], config: &FrequencyConfig) -> Result<GevFit, GevError> {
    config.validate()?;
    let params = fit_gev_params(sample)?;
    let curve = ReturnPeriodCurve::new(&params, config.max_return_period(), config.n_points());
    Ok(GevFit {
        log_likelihood: params.log_likelihood(sample),
        params,
        n: sample.len(),
        curve,
    })
}

/// Fits GEV parameters only, without building a curve.
///
/// # Errors
///
/// Same sample errors as [`fit_gev`].
pub fn fit_gev_params(sample: &[f64]) -> Result<GevParams, GevError> {
    validate_sample(sample)?;
    let (params, log_likelihood) = optimizer::fit_params(sample)?;
    debug!(
        shape = params.shape(),
        loc = params.loc(),
        scale = params.scale(),
        log_likelihood,
        "GEV fitted"
    );
    Ok(params)
}

//! Return-period to quantile curves.

use crate::params::GevParams;

/// Quantiles of a fitted distribution on a grid of return periods.
///
/// Both sequences increase with the index. The first point sits at `T = 1`
/// (non-exceedance probability 0), so its quantile is the lower support
/// bound and may be `-inf`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnPeriodCurve {
    return_periods: Vec<f64>,
    quantiles: Vec<f64>,
}

impl ReturnPeriodCurve {
    /// Evaluates `params` on `n_points` return periods linearly spaced from
    /// 1 to `max_return_period`.
    pub fn new(params: &GevParams, max_return_period: f64, n_points: usize) -> Self {
        let step = if n_points > 1 {
            (max_return_period - 1.0) / (n_points - 1) as f64
        } else {
            0.0
        };
        let return_periods: Vec<f64> = (0..n_points)
            .map(|i| {
                if i + 1 == n_points {
                    max_return_period
                } else {
                    1.0 + i as f64 * step
                }
            })
            .collect();
        let quantiles = return_periods
            .iter()
            .map(|&t| params.quantile(1.0 - 1.0 / t))
            .collect();
        Self {
            return_periods,
            quantiles,
        }
    }

    /// Return periods in years.
    pub fn return_periods(&self) -> &[f64] {
        &self.return_periods
    }

    /// Quantile values aligned with [`return_periods`](Self::return_periods).
    pub fn quantiles(&self) -> &[f64] {
        &self.quantiles
    }

    pub fn len(&self) -> usize {
        self.return_periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.return_periods.is_empty()
    }

    /// `(return period, quantile)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.return_periods
            .iter()
            .copied()
            .zip(self.quantiles.iter().copied())
    }

    /// At most `max_points` evenly strided points, always including the last.
    pub fn thinned(&self, max_points: usize) -> Vec<(f64, f64)> {
        if max_points == 0 || self.is_empty() {
            return Vec::new();
        }
        let stride = self.len().div_ceil(max_points).max(1);
        let mut points: Vec<(f64, f64)> = self.points().step_by(stride).collect();
        let last = self.len() - 1;
        if last % stride != 0 {
            if points.len() == max_points {
                points.pop();
            }
            points.push((self.return_periods[last], self.quantiles[last]));
        }
        points
    }
}

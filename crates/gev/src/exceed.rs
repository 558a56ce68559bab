//! Empirical exceedance probabilities (Weibull plotting positions).

/// A sample sorted ascending with its empirical exceedance probabilities
/// and return periods.
#[derive(Debug, Clone, PartialEq)]
pub struct Exceedance {
    pub sorted: Vec<f64>,
    /// `1 - i / (n + 1)` for the i-th smallest value.
    pub exceedance: Vec<f64>,
    /// `1 / exceedance`.
    pub return_period: Vec<f64>,
}

impl Exceedance {
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Empirical return period of `value`: that of the largest sorted
    /// value not above it, or `None` if `value` is below the sample.
    pub fn return_period_of(&self, value: f64) -> Option<f64> {
        let idx = self.sorted.partition_point(|&x| x <= value);
        idx.checked_sub(1).map(|i| self.return_period[i])
    }
}

/// Sorts `sample` ascending and computes plotting-position exceedance
/// probabilities `1 - i / (n + 1)` and return periods `1 / exceedance`.
pub fn exceed(sample: &[f64]) -> Exceedance {
    let mut sorted = sample.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len() as f64;
    let exceedance: Vec<f64> = (1..=sorted.len())
        .map(|i| 1.0 - i as f64 / (n + 1.0))
        .collect();
    let return_period = exceedance.iter().map(|p| 1.0 / p).collect();
    Exceedance {
        sorted,
        exceedance,
        return_period,
    }
}

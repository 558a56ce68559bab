//! GEV parameter type and distribution functions.

/// Shapes closer to zero than this use the Gumbel limit.
const GUMBEL_EPS: f64 = 1e-8;

/// Validated parameters of a generalized extreme-value distribution.
///
/// The shape uses the `c` convention, `c = -ξ`: `c < 0` gives a heavy
/// (Fréchet) upper tail, `c > 0` a bounded (reversed Weibull) upper tail and
/// `c = 0` the Gumbel distribution. The same convention is used for fitting
/// and for every distribution function here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GevParams {
    shape: f64,
    loc: f64,
    scale: f64,
}

impl GevParams {
    /// Creates parameters after checking that all three are finite and
    /// `scale` is positive.
    pub fn new(shape: f64, loc: f64, scale: f64) -> Option<Self> {
        if shape.is_finite() && loc.is_finite() && scale.is_finite() && scale > 0.0 {
            Some(Self { shape, loc, scale })
        } else {
            None
        }
    }

    /// Shape parameter `c`.
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Shape in the `ξ` convention (`ξ = -c`).
    pub fn xi(&self) -> f64 {
        -self.shape
    }

    /// Location parameter.
    pub fn loc(&self) -> f64 {
        self.loc
    }

    /// Scale parameter.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    fn is_gumbel(&self) -> bool {
        self.shape.abs() < GUMBEL_EPS
    }

    /// `ln t` with `t = 1 - c·z`, or `None` outside the support.
    fn support_term(&self, x: f64) -> Option<f64> {
        let z = (x - self.loc) / self.scale;
        let cz = self.shape * z;
        (cz < 1.0).then(|| (-cz).ln_1p())
    }

    /// Inverse CDF.
    ///
    /// `p = 0` and `p = 1` return the support bounds, which are infinite on
    /// the unbounded side. Returns NaN for `p` outside `[0, 1]`.
    pub fn quantile(&self, p: f64) -> f64 {
        if !(0.0..=1.0).contains(&p) {
            return f64::NAN;
        }
        // y = -ln p, from +inf at p = 0 down to 0 at p = 1.
        let ln_y = (-p.ln()).ln();
        if self.is_gumbel() {
            return self.loc - self.scale * ln_y;
        }
        // (1 - y^c) / c, written with expm1 to stay continuous through c = 0.
        // Infinite ln y at p = 0 or 1 lands on the support bounds.
        self.loc - self.scale * (self.shape * ln_y).exp_m1() / self.shape
    }

    /// Cumulative distribution function.
    pub fn cdf(&self, x: f64) -> f64 {
        if self.is_gumbel() {
            let z = (x - self.loc) / self.scale;
            return (-(-z).exp()).exp();
        }
        match self.support_term(x) {
            Some(ln_t) => (-(ln_t / self.shape).exp()).exp(),
            // Above the upper bound (c > 0) or below the lower bound (c < 0).
            None if self.shape > 0.0 => 1.0,
            None => 0.0,
        }
    }

    /// Natural log of the density; `-inf` outside the support.
    pub fn log_pdf(&self, x: f64) -> f64 {
        let z = (x - self.loc) / self.scale;
        if self.is_gumbel() {
            return -self.scale.ln() - z - (-z).exp();
        }
        match self.support_term(x) {
            Some(ln_t) => {
                -self.scale.ln() + (1.0 / self.shape - 1.0) * ln_t - (ln_t / self.shape).exp()
            }
            None => f64::NEG_INFINITY,
        }
    }

    /// Probability density function.
    pub fn pdf(&self, x: f64) -> f64 {
        self.log_pdf(x).exp()
    }

    /// Log-likelihood of `sample`; `-inf` when any value lies outside the support.
    pub fn log_likelihood(&self, sample: &[f64]) -> f64 {
        sample.iter().map(|&x| self.log_pdf(x)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn new_rejects_bad_scale() {
        assert!(GevParams::new(0.1, 10.0, 0.0).is_none());
        assert!(GevParams::new(0.1, 10.0, -1.0).is_none());
        assert!(GevParams::new(f64::NAN, 10.0, 1.0).is_none());
        assert!(GevParams::new(0.1, 10.0, 1.0).is_some());
    }

    #[test]
    fn gumbel_quantile_closed_form() {
        let g = GevParams::new(0.0, 50.0, 10.0).unwrap();
        let p: f64 = 0.99;
        assert_relative_eq!(g.quantile(p), 50.0 - 10.0 * (-p.ln()).ln(), epsilon = 1e-10);
        assert_relative_eq!(g.quantile((-std::f64::consts::E).exp()), 40.0, epsilon = 1e-10);
    }

    #[test]
    fn quantile_inverts_cdf() {
        for shape in [-0.3, -0.1, 0.0, 0.05, 0.2] {
            let g = GevParams::new(shape, 100.0, 20.0).unwrap();
            for p in [0.01, 0.1, 0.5, 0.9, 0.99, 0.999] {
                assert_relative_eq!(g.cdf(g.quantile(p)), p, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn quantile_continuous_through_zero_shape() {
        let p = 0.99;
        let at_zero = GevParams::new(0.0, 100.0, 20.0).unwrap().quantile(p);
        for shape in [-1e-6, -1e-9, 1e-9, 1e-6] {
            let q = GevParams::new(shape, 100.0, 20.0).unwrap().quantile(p);
            assert_relative_eq!(q, at_zero, epsilon = 1e-3);
        }
    }

    #[test]
    fn support_bounds() {
        // Bounded above.
        let g = GevParams::new(0.25, 0.0, 1.0).unwrap();
        assert_relative_eq!(g.quantile(1.0), 4.0);
        assert_eq!(g.cdf(5.0), 1.0);
        assert_eq!(g.log_pdf(5.0), f64::NEG_INFINITY);
        assert_eq!(g.quantile(0.0), f64::NEG_INFINITY);

        // Bounded below.
        let g = GevParams::new(-0.25, 0.0, 1.0).unwrap();
        assert_relative_eq!(g.quantile(0.0), -4.0);
        assert_eq!(g.cdf(-5.0), 0.0);
        assert_eq!(g.pdf(-5.0), 0.0);
        assert_eq!(g.quantile(1.0), f64::INFINITY);
    }

    #[test]
    fn pdf_integrates_to_one() {
        let g = GevParams::new(-0.1, 10.0, 2.0).unwrap();
        let (lo, hi) = (g.quantile(1e-9), g.quantile(1.0 - 1e-9));
        let n = 20_000;
        let h = (hi - lo) / n as f64;
        let area: f64 = (0..n).map(|i| g.pdf(lo + (i as f64 + 0.5) * h) * h).sum();
        assert_relative_eq!(area, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn quantile_outside_unit_interval_is_nan() {
        let g = GevParams::new(0.0, 0.0, 1.0).unwrap();
        assert!(g.quantile(-0.1).is_nan());
        assert!(g.quantile(1.1).is_nan());
    }
}

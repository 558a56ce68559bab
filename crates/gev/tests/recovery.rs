use approx::assert_abs_diff_eq;
use freshet_gev::{FrequencyConfig, GevParams, exceed, fit_gev};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Gumbel};

/// Evenly spread plotting-position sample of `params`.
fn quantile_sample(params: &GevParams, n: usize) -> Vec<f64> {
    (1..=n)
        .map(|i| params.quantile((i as f64 - 0.5) / n as f64))
        .collect()
}

#[test]
fn recovers_heavy_tailed_parameters() {
    let truth = GevParams::new(-0.1, 200.0, 50.0).unwrap();
    let sample = quantile_sample(&truth, 1000);
    let fit = fit_gev(&sample, &FrequencyConfig::default()).unwrap();
    let p = fit.params();

    assert_abs_diff_eq!(p.shape(), -0.1, epsilon = 0.03);
    assert_abs_diff_eq!(p.loc(), 200.0, epsilon = 2.0);
    assert_abs_diff_eq!(p.scale(), 50.0, epsilon = 1.5);
    assert!(p.xi() > 0.0);
}

#[test]
fn recovers_bounded_parameters() {
    let truth = GevParams::new(0.2, 30.0, 8.0).unwrap();
    let sample = quantile_sample(&truth, 1000);
    let fit = fit_gev(&sample, &FrequencyConfig::default()).unwrap();
    let p = fit.params();

    assert_abs_diff_eq!(p.shape(), 0.2, epsilon = 0.03);
    assert_abs_diff_eq!(p.loc(), 30.0, epsilon = 0.5);
    assert_abs_diff_eq!(p.scale(), 8.0, epsilon = 0.3);
}

#[test]
fn recovers_gumbel_from_random_sample() {
    let mut rng = StdRng::seed_from_u64(42);
    let gumbel = Gumbel::new(50.0, 10.0).unwrap();
    let sample: Vec<f64> = (0..2000).map(|_| gumbel.sample(&mut rng)).collect();
    let fit = fit_gev(&sample, &FrequencyConfig::default()).unwrap();
    let p = fit.params();

    assert_abs_diff_eq!(p.shape(), 0.0, epsilon = 0.08);
    assert_abs_diff_eq!(p.loc(), 50.0, epsilon = 1.5);
    assert_abs_diff_eq!(p.scale(), 10.0, epsilon = 1.5);
}

#[test]
fn fitted_curve_is_monotone() {
    let mut rng = StdRng::seed_from_u64(7);
    let gumbel = Gumbel::new(300.0, 80.0).unwrap();
    let sample: Vec<f64> = (0..40).map(|_| gumbel.sample(&mut rng)).collect();
    let fit = fit_gev(&sample, &FrequencyConfig::new(100.0)).unwrap();
    let curve = fit.curve();

    assert_eq!(curve.len(), 100_000);
    assert_eq!(curve.return_periods()[0], 1.0);
    assert_eq!(*curve.return_periods().last().unwrap(), 100.0);
    for w in curve.quantiles().windows(2) {
        assert!(w[1] >= w[0]);
    }
    for w in curve.return_periods().windows(2) {
        assert!(w[1] > w[0]);
    }
}

#[test]
fn fitted_curve_tracks_empirical_points() {
    let truth = GevParams::new(0.0, 100.0, 20.0).unwrap();
    let sample = quantile_sample(&truth, 200);
    let fit = fit_gev(&sample, &FrequencyConfig::new(500.0)).unwrap();
    let empirical = exceed(&sample);

    // Median and upper-quartile empirical points lie near the fitted curve.
    for idx in [100, 150] {
        let t = empirical.return_period[idx];
        let fitted = fit.return_level(t);
        assert_abs_diff_eq!(fitted, empirical.sorted[idx], epsilon = 3.0);
    }
}

//! Frequency report written as `frequency.json`.

use anyhow::{Context, Result};
use serde::Serialize;

use freshet_gev::{GevError, GevFit, exceed};

/// Points kept from each return-period curve.
const CURVE_POINTS: usize = 1_000;

#[derive(Debug, Serialize)]
pub struct FrequencyReport {
    pub max_return_period: f64,
    pub series: Vec<SeriesReport>,
}

/// Fit and empirical points for one sample of annual extremes.
#[derive(Debug, Serialize)]
pub struct SeriesReport {
    pub name: String,
    pub unit: String,
    pub n: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit: Option<FitReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub empirical: Vec<EmpiricalPoint>,
    pub curve: Vec<CurvePoint>,
}

#[derive(Debug, Serialize)]
pub struct FitReport {
    /// Shape in the `c = -xi` convention.
    pub shape: f64,
    pub xi: f64,
    pub loc: f64,
    pub scale: f64,
    pub log_likelihood: f64,
}

#[derive(Debug, Serialize)]
pub struct EmpiricalPoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    pub value: f64,
    pub exceedance: f64,
    pub return_period: f64,
}

#[derive(Debug, Serialize)]
pub struct CurvePoint {
    pub return_period: f64,
    /// `None` where the quantile is unbounded.
    pub quantile: Option<f64>,
}

/// Builds the report entry for `sample`, labelling empirical points with
/// `years` when given (same order as `sample`).
///
/// A fit failure is recorded in the entry; any other error is returned.
pub fn series_report(
    name: &str,
    unit: &str,
    sample: &[f64],
    years: Option<&[i32]>,
    fit: Result<GevFit, GevError>,
) -> Result<SeriesReport> {
    let empirical = empirical_points(sample, years);
    let (fit, curve, error) = match fit {
        Ok(fit) => {
            let p = fit.params();
            let curve = fit
                .curve()
                .thinned(CURVE_POINTS)
                .into_iter()
                .map(|(return_period, q)| CurvePoint {
                    return_period,
                    quantile: q.is_finite().then_some(q),
                })
                .collect();
            let report = FitReport {
                shape: p.shape(),
                xi: p.xi(),
                loc: p.loc(),
                scale: p.scale(),
                log_likelihood: fit.log_likelihood(),
            };
            (Some(report), curve, None)
        }
        Err(e) if e.is_fit_failure() => {
            tracing::warn!(series = name, error = %e, "GEV fit failed");
            (None, Vec::new(), Some(e.to_string()))
        }
        Err(e) => return Err(e).with_context(|| format!("cannot fit {name}")),
    };
    Ok(SeriesReport {
        name: name.to_string(),
        unit: unit.to_string(),
        n: sample.len(),
        fit,
        error,
        empirical,
        curve,
    })
}

/// Entry for a series with no values, e.g. a record without peak events.
pub fn empty_report(name: &str, unit: &str) -> SeriesReport {
    SeriesReport {
        name: name.to_string(),
        unit: unit.to_string(),
        n: 0,
        fit: None,
        error: Some("no annual extremes to fit".to_string()),
        empirical: Vec::new(),
        curve: Vec::new(),
    }
}

fn empirical_points(sample: &[f64], years: Option<&[i32]>) -> Vec<EmpiricalPoint> {
    let e = exceed(sample);
    // Same stable ordering as `exceed`, to carry the years along.
    let mut order: Vec<usize> = (0..sample.len()).collect();
    order.sort_by(|&a, &b| sample[a].total_cmp(&sample[b]));
    order
        .into_iter()
        .enumerate()
        .map(|(rank, idx)| EmpiricalPoint {
            year: years.and_then(|y| y.get(idx).copied()),
            value: e.sorted[rank],
            exceedance: e.exceedance[rank],
            return_period: e.return_period[rank],
        })
        .collect()
}

/// Serialises the report as pretty-printed JSON.
pub fn to_json(report: &FrequencyReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("failed to serialise frequency report")
}

#[cfg(test)]
mod tests {
    use super::*;
    use freshet_gev::{FrequencyConfig, fit_gev};

    #[test]
    fn empirical_points_keep_years() {
        let points = empirical_points(&[30.0, 10.0, 20.0], Some(&[2001, 2002, 2003]));
        let years: Vec<Option<i32>> = points.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![Some(2002), Some(2003), Some(2001)]);
        assert_eq!(points[2].value, 30.0);
        assert_eq!(points[2].return_period, 4.0);
    }

    #[test]
    fn fit_failure_is_recorded() {
        let sample = [5.0, 5.0, 5.0];
        let fit = fit_gev(&sample, &FrequencyConfig::default());
        let report = series_report("max_flow", "m3/s", &sample, None, fit).unwrap();
        assert!(report.fit.is_none());
        assert_eq!(report.error.as_deref(), Some("sample is constant (zero variance)"));
        assert!(report.curve.is_empty());
    }

    #[test]
    fn validation_error_is_returned() {
        let fit = fit_gev(&[], &FrequencyConfig::default());
        assert!(series_report("max_flow", "m3/s", &[], None, fit).is_err());
    }

    #[test]
    fn json_has_null_for_unbounded_quantile() {
        let sample = [120.0, 95.0, 143.0, 88.0, 170.0, 101.0, 132.0, 110.0];
        let fit = fit_gev(&sample, &FrequencyConfig::new(50.0).with_n_points(100));
        let entry = series_report("max_flow", "m3/s", &sample, None, fit).unwrap();
        let report = FrequencyReport {
            max_return_period: 50.0,
            series: vec![entry],
        };
        let json = to_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let curve = value["series"][0]["curve"].as_array().unwrap();
        assert_eq!(curve.len(), 100);
        assert_eq!(curve[99]["return_period"], 50.0);
        assert!(value["series"][0]["fit"]["scale"].as_f64().unwrap() > 0.0);
    }
}

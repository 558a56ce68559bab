//! # freshet-gev
//!
//! Generalized extreme-value (GEV) fitting for annual maxima, return-period
//! curves and empirical exceedance probabilities.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["annual maxima"] -->|"fit_gev(&x, &config)?"| B["GevFit"]
//!     B --> C["GevParams (c, loc, scale)"]
//!     B --> D["ReturnPeriodCurve"]
//!     A -->|"exceed(&x)"| E["Exceedance"]
//! ```
//!
//! Shapes follow the `c = -ξ` convention throughout; see [`GevParams`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use freshet_gev::{FrequencyConfig, exceed, fit_gev};
//!
//! let fit = fit_gev(&annual_max, &FrequencyConfig::new(100.0))?;
//! println!("100-year flood: {:.1} m³/s", fit.return_level(100.0));
//! let empirical = exceed(&annual_max);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `params` | Parameter type with quantile, CDF and density |
//! | `optimizer` | Nelder-Mead likelihood maximisation (internal) |
//! | `fit` | Sample validation and [`fit_gev`] |
//! | `curve` | Return-period grid evaluation |
//! | `exceed` | Plotting-position exceedance |
//! | `config` | Return-period grid settings |
//! | `error` | Error types |

mod config;
mod curve;
mod error;
mod exceed;
mod fit;
mod optimizer;
mod params;

pub use config::{DEFAULT_N_POINTS, FrequencyConfig};
pub use curve::ReturnPeriodCurve;
pub use error::GevError;
pub use exceed::{Exceedance, exceed};
pub use fit::{GevFit, MIN_DISTINCT, fit_gev, fit_gev_params};
pub use params::GevParams;

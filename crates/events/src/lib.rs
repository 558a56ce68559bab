//! # freshet-events
//!
//! Flood-event summaries and the per-year extreme table built from a
//! [`LabeledSeries`](freshet_separation::LabeledSeries).
//!
//! ```ignore
//! use freshet_events::{annual_extremes, summarize_events};
//!
//! let events = summarize_events(&series);
//! let annual = annual_extremes(&series, &events);
//! let flow_sample: Vec<f64> = annual.iter().map(|a| a.max_flow).collect();
//! ```

mod annual;
mod event;

pub use annual::{AnnualExtreme, annual_extremes};
pub use event::{PeakEvent, summarize_events};

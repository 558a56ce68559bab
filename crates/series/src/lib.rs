//! # freshet-series
//!
//! Uniform time grid and bounded gap interpolation for streamflow records.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Vec of Observation"] -->|"build_grid(&obs, step)?"| B["FlowGrid (raw)"]
//!     B -->|".interpolate(max_gap_hours)?"| C["FlowGrid (gap-filled)"]
//!     C --> D[".timestamps()"]
//!     C --> E[".step_hours()"]
//!     C --> F[".interpolated()"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use freshet_series::{Observation, StepSize, build_grid};
//!
//! let grid = build_grid(&observations, StepSize::from_minutes(15)?)?
//!     .interpolate(Some(12.0))?;
//! assert_eq!(grid.step_hours()[0], 0.0);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `step` | Supported grid resolutions (5, 15, 60 minutes) |
//! | `observation` | Raw (timestamp, flow) readings |
//! | `grid` | Grid construction and alignment |
//! | `interpolate` | Time-weighted gap filling |
//! | `error` | Error types |

mod error;
mod grid;
mod interpolate;
mod observation;
mod step;

pub use error::SeriesError;
pub use grid::{FlowGrid, build_grid};
pub use observation::Observation;
pub use step::StepSize;

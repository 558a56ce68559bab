//! # freshet-io
//!
//! Read `(timestamp, flow)` records from CSV and write the labeled series,
//! event and annual tables back to CSV. Bridges external files into the
//! [`Observation`](freshet_series::Observation) based APIs of the other
//! freshet crates.

mod error;
mod reader;
mod validate;
mod writer;

pub use error::IoError;
pub use reader::{ReaderConfig, read_column, read_observations, read_observations_from};
pub use writer::{TIMESTAMP_FORMAT, write_annual, write_events, write_file, write_series};

//! `helm-output` — export of finished simulation runs.
//!
//! The simulation core records trajectories but never touches the
//! filesystem; this crate consumes finished [`Vessel`](helm_steer::Vessel)s
//! and writes:
//!
//! | Module      | Output                                                    |
//! |-------------|-----------------------------------------------------------|
//! | [`summary`] | `VesselSummary` — per-vessel run statistics               |
//! | [`csv`]     | `CsvSummaryWriter` (`vessel_summaries.csv`) and per-tick trajectory CSVs |
//! | [`json`]    | `JsonSummaryWriter` (`vessel_summaries.json`, keyed by vessel name) |
//! | [`error`]   | `OutputError`, `OutputResult<T>`                          |
//!
//! Both summary backends implement [`SummaryWriter`]; `finish` is idempotent
//! and must be called to flush.

pub mod csv;
pub mod error;
pub mod json;
pub mod summary;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::{CsvSummaryWriter, write_track_csv};
pub use error::{OutputError, OutputResult};
pub use json::JsonSummaryWriter;
pub use summary::VesselSummary;
pub use writer::SummaryWriter;

//! The `SummaryWriter` trait implemented by both summary backends.

use crate::{OutputResult, VesselSummary};

/// Trait implemented by the CSV and JSON summary writers.
pub trait SummaryWriter {
    /// Record one vessel's summary.
    fn write_summary(&mut self, row: &VesselSummary) -> OutputResult<()>;

    /// Flush and close the underlying file.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

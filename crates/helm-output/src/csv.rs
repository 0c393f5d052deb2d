//! CSV output backend.

use std::fs::File;
use std::path::Path;

use csv::Writer;
use helm_steer::Vessel;

use crate::writer::SummaryWriter;
use crate::{OutputResult, VesselSummary};

/// Writes one `vessel_summaries.csv` in the configured output directory,
/// one row per vessel.
pub struct CsvSummaryWriter {
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvSummaryWriter {
    /// Open (or create) the summary file in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summaries = Writer::from_path(dir.join("vessel_summaries.csv"))?;
        summaries.write_record([
            "name",
            "steering",
            "max_speed",
            "heading_change_deg",
            "total_negative_work",
            "ticks",
            "sail_time_secs",
            "arrived",
        ])?;
        Ok(Self { summaries, finished: false })
    }
}

impl SummaryWriter for CsvSummaryWriter {
    fn write_summary(&mut self, row: &VesselSummary) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.name.clone(),
            row.steering.clone(),
            row.max_speed.to_string(),
            row.heading_change_deg.to_string(),
            row.total_negative_work.to_string(),
            row.ticks.to_string(),
            row.sail_time_secs.to_string(),
            (row.arrived as u8).to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        Ok(())
    }
}

/// Write one vessel's full trajectory as CSV for external plotting.
///
/// Row `k` holds the state after accepted tick `k` (1-based): the position
/// reached and the speed, heading, and work recorded for that tick.
pub fn write_track_csv(vessel: &Vessel, path: &Path) -> OutputResult<()> {
    let t = vessel.trajectory();
    let mut w = Writer::from_path(path)?;
    w.write_record(["tick", "x", "y", "speed", "heading", "work"])?;
    for k in 0..t.len() {
        let pos = t.positions()[k + 1];
        w.write_record(&[
            (k + 1).to_string(),
            pos.x.to_string(),
            pos.y.to_string(),
            t.speeds()[k].to_string(),
            t.headings()[k].to_string(),
            t.works()[k].to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

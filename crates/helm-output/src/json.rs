//! JSON output backend.
//!
//! Produces a single `vessel_summaries.json`: an object keyed by vessel
//! name, matching the shape downstream dashboards already consume.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::writer::SummaryWriter;
use crate::{OutputResult, VesselSummary};

/// Buffers summaries in memory and writes the whole map on `finish`.
pub struct JsonSummaryWriter {
    path:     PathBuf,
    rows:     BTreeMap<String, VesselSummary>,
    finished: bool,
}

impl JsonSummaryWriter {
    pub fn new(dir: &Path) -> Self {
        Self {
            path:     dir.join("vessel_summaries.json"),
            rows:     BTreeMap::new(),
            finished: false,
        }
    }
}

impl SummaryWriter for JsonSummaryWriter {
    fn write_summary(&mut self, row: &VesselSummary) -> OutputResult<()> {
        self.rows.insert(row.name.clone(), row.clone());
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        let file = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(file, &self.rows)?;
        Ok(())
    }
}

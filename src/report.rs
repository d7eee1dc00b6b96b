use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::errors::SynthError;
use crate::types::{PolicyLabel, Seed};

/// Counts of everything injected during one run.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SynthesisReport {
    /// Seed that reproduces the run.
    pub seed: Seed,
    /// Logical records requested (`n`).
    pub requested: usize,
    /// Rows written to the sink, duplicates included.
    pub emitted: usize,
    /// Rows that were second copies of the preceding record.
    pub duplicates: usize,
    /// Records with one field forcibly emptied.
    pub blanked: usize,
    /// Hits per corruption policy label.
    pub corruptions: BTreeMap<String, usize>,
}

impl SynthesisReport {
    /// Empty report for a run of `requested` records.
    pub fn new(seed: Seed, requested: usize) -> Self {
        Self {
            seed,
            requested,
            ..Self::default()
        }
    }

    pub(crate) fn record_corruptions(&mut self, labels: &[PolicyLabel]) {
        for label in labels {
            *self.corruptions.entry((*label).to_string()).or_insert(0) += 1;
        }
    }

    /// Hits recorded for `label` (0 when it never fired).
    pub fn corruption_count(&self, label: &str) -> usize {
        self.corruptions.get(label).copied().unwrap_or(0)
    }

    /// Fraction of requested records hit by `label`.
    pub fn corruption_rate(&self, label: &str) -> f64 {
        self.share(self.corruption_count(label))
    }

    /// Fraction of requested records followed by a duplicate.
    pub fn duplicate_rate(&self) -> f64 {
        self.share(self.duplicates)
    }

    /// Fraction of requested records with a forced blank.
    pub fn blank_rate(&self) -> f64 {
        self.share(self.blanked)
    }

    fn share(&self, count: usize) -> f64 {
        if self.requested == 0 {
            0.0
        } else {
            count as f64 / self.requested as f64
        }
    }

    /// Write the report as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), SynthError> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}

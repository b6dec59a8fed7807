//! Snapshot loading
//!
//! Reads the records the table browses from a file. Two layouts are
//! accepted: a JSON array of records, or NDJSON with one record per line.

use crate::etl::Extractor;
use crate::record::WorkflowRecord;
use eyre::{Context, Result};
use std::path::{Path, PathBuf};

/// Read a workflow snapshot from a JSON or NDJSON file
pub struct SnapshotReader {
    path: PathBuf,
}

impl SnapshotReader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record in the file
    pub fn read(&self) -> Result<Vec<WorkflowRecord>> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read snapshot file: {}", self.path.display()))?;

        let records = parse_snapshot(&content)
            .with_context(|| format!("Failed to parse snapshot file: {}", self.path.display()))?;

        log::debug!(
            "Read {} record(s) from {}",
            records.len(),
            self.path.display()
        );

        Ok(records)
    }
}

impl Extractor for SnapshotReader {
    type Item = WorkflowRecord;

    fn extract(&self) -> Result<Vec<Self::Item>> {
        self.read()
    }
}

/// Parse snapshot text, picking the layout from the first non-blank character
pub fn parse_snapshot(content: &str) -> Result<Vec<WorkflowRecord>> {
    if content.trim_start().starts_with('[') {
        return serde_json::from_str(content).context("Failed to parse JSON array of records");
    }

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(number, line)| {
            serde_json::from_str(line)
                .with_context(|| format!("Failed to parse record on line {}", number + 1))
        })
        .collect()
}

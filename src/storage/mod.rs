//! File system storage operations
//!
//! This module handles all file I/O for the table:
//! - Reading the workflow snapshot (JSON array or NDJSON)
//! - Saving exported files

mod sink;
mod snapshot;

pub use sink::{DirectorySink, SaveSink};
pub use snapshot::{SnapshotReader, parse_snapshot};

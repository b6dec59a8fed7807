//! Workflow Organizer
//!
//! Client-side table engine for browsing snapshots of automation workflows:
//! sort, filter, paginate, toggle columns, and export a workflow definition.

pub mod cli;
pub mod config;
pub mod etl;
pub mod export;
pub mod record;
pub mod storage;
pub mod table;

// Re-exports for convenience
pub use config::TableConfig;
pub use etl::Extractor;
pub use export::{EXPORT_FILE_NAME, ExportError, export_payload, render_payload};
pub use record::{Payload, WorkflowRecord};
pub use storage::{DirectorySink, SaveSink, SnapshotReader};
pub use table::{DataTable, FilterValue, RowModel, SortDirection, TableState};

//! Data table: snapshot, state and derived rows in one place

use super::column::{COLUMNS, ColumnDef, ColumnId};
use super::filter::FilterValue;
use super::options::FilterOptions;
use super::pipeline::RowModel;
use super::sort::SortDirection;
use super::state::TableState;
use crate::config::TableConfig;
use crate::etl::Extractor;
use crate::export::{ExportError, export_payload};
use crate::record::WorkflowRecord;
use crate::storage::SaveSink;
use eyre::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;

/// Browsable table over an immutable workflow snapshot
///
/// Filter-choice options are derived once, when the table is built, because
/// the snapshot never changes afterwards. Rows are re-derived on demand from
/// the current state.
///
/// # Example
/// ```
/// use workflow_organizer::config::TableConfig;
/// use workflow_organizer::record::WorkflowRecord;
/// use workflow_organizer::table::{DataTable, FilterValue};
///
/// let snapshot = vec![
///     WorkflowRecord::new("1", "Sync CRM").with_node_types(["httpRequest"]),
///     WorkflowRecord::new("2", "Daily digest").with_node_types(["cron"]),
/// ];
/// let mut table = DataTable::new(snapshot, TableConfig::default());
///
/// table.set_filter("nodeTypes", FilterValue::values(["httpRequest"]));
/// let rows = table.rows();
/// assert_eq!(rows.filtered_count(), 1);
/// assert_eq!(rows.page[0].name, "Sync CRM");
/// ```
#[derive(Debug, Clone)]
pub struct DataTable {
    snapshot: Arc<[WorkflowRecord]>,
    options: FilterOptions,
    state: TableState,
    config: TableConfig,
}

impl DataTable {
    pub fn new(snapshot: impl Into<Arc<[WorkflowRecord]>>, config: TableConfig) -> Self {
        let snapshot = snapshot.into();
        let options = FilterOptions::derive(&snapshot);
        log::info!(
            "Loaded table with {} workflow(s), {} per page",
            snapshot.len(),
            config.page_size
        );
        Self {
            snapshot,
            options,
            state: TableState::new(config.page_size),
            config,
        }
    }

    /// Build a table from a single extraction of the source
    pub fn from_source(
        source: &impl Extractor<Item = WorkflowRecord>,
        config: TableConfig,
    ) -> Result<Self> {
        let records = source.extract().context("Failed to load workflow snapshot")?;
        Ok(Self::new(records, config))
    }

    pub fn snapshot(&self) -> &[WorkflowRecord] {
        &self.snapshot
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Filter-choice lists for the multi-select columns
    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Run the row pipeline against the current state
    pub fn rows(&self) -> RowModel<'_> {
        RowModel::build(&self.snapshot, &self.state, self.config.array_match)
    }

    pub fn set_sort(&mut self, column: &str, direction: Option<SortDirection>) -> bool {
        self.state.set_sort(column, direction)
    }

    pub fn toggle_sort(&mut self, column: &str) -> bool {
        self.state.toggle_sort(column)
    }

    pub fn set_filter(&mut self, column: &str, value: FilterValue) -> bool {
        let applied = self.state.set_filter(column, value);
        if applied {
            self.after_filter_change();
        }
        applied
    }

    pub fn set_global_filter(&mut self, query: impl Into<String>) {
        self.state.set_global_filter(query);
        self.after_filter_change();
    }

    pub fn clear_filters(&mut self) {
        self.state.clear_filters();
        self.after_filter_change();
    }

    pub fn set_visibility(&mut self, column: &str, visible: bool) -> bool {
        self.state.set_visibility(column, visible)
    }

    pub fn set_page(&mut self, index: usize) {
        self.state.set_page(index);
    }

    pub fn next_page(&mut self) -> bool {
        let rows = self.rows().filtered_count();
        self.state.next_page(rows)
    }

    pub fn previous_page(&mut self) -> bool {
        self.state.previous_page()
    }

    /// Visible columns in display order
    pub fn visible_columns(&self) -> Vec<&'static ColumnDef> {
        self.state.visibility().visible_columns()
    }

    /// Every column, for headers and the column menu
    pub fn columns(&self) -> &'static [ColumnDef] {
        &COLUMNS
    }

    pub fn find(&self, id: &str) -> Option<&WorkflowRecord> {
        self.snapshot.iter().find(|r| r.id == id)
    }

    /// Export one record's payload to the sink
    ///
    /// Failures are logged and returned; the table state is never touched.
    pub fn export_row(&self, id: &str, sink: &impl SaveSink) -> Result<PathBuf> {
        let result = match self.find(id) {
            Some(record) => export_payload(&record.payload, sink)
                .with_context(|| format!("Failed to export workflow '{}'", record.name)),
            None => Err(ExportError::RecordNotFound(id.to_string()).into()),
        };
        if let Err(e) = &result {
            log::error!("{:#}", e);
        }
        result
    }

    fn after_filter_change(&mut self) {
        if !self.config.clamp_page {
            return;
        }
        let rows = self.rows().filtered_count();
        if self.state.clamp_page(rows) {
            log::debug!(
                "Page index clamped to {} after filter change",
                self.state.pagination().page_index()
            );
        }
    }

    /// Display text of one cell
    pub fn cell_text(record: &WorkflowRecord, column: ColumnId) -> String {
        column.def().value(record).display()
    }
}

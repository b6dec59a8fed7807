//! CLI helper functions
//!
//! The binary is a thin presentation layer over [`DataTable`]: it loads a
//! snapshot, replays the operator's choices as setter calls, and renders the
//! resulting page as plain text.

use crate::{
    config::TableConfig,
    storage::{DirectorySink, SnapshotReader},
    table::{ColumnId, DataTable, FilterValue, SortDirection, hideable_columns},
};
use eyre::{Context, Result};
use std::path::{Path, PathBuf};

/// Operator choices for one `list` invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseOptions {
    pub name: Option<String>,
    pub description: Option<String>,
    pub node_types: Vec<String>,
    pub credentials: Vec<String>,
    pub search: Option<String>,
    /// Sort spec in the form `column[:asc|desc]`
    pub sort: Option<String>,
    pub page: usize,
    pub hidden: Vec<String>,
}

/// Load configuration: YAML file if given, then `WFO_*` environment overrides
pub fn load_config(path: Option<&Path>) -> Result<TableConfig> {
    let config = match path {
        Some(path) => TableConfig::read(path)?,
        None => TableConfig::default(),
    };
    config.with_env()
}

/// Read a snapshot file and build a table over it
pub fn load_table(snapshot: impl AsRef<Path>, config: TableConfig) -> Result<DataTable> {
    let snapshot = snapshot.as_ref();
    log::info!("Loading snapshot from {}", snapshot.display());
    DataTable::from_source(&SnapshotReader::new(snapshot), config)
}

/// Parse `column[:asc|desc]`, defaulting to ascending
pub fn parse_sort_spec(spec: &str) -> Result<(ColumnId, SortDirection)> {
    let (column, direction) = match spec.split_once(':') {
        Some((column, direction)) => (column, direction.parse::<SortDirection>()?),
        None => (spec, SortDirection::Ascending),
    };
    let column: ColumnId = column.trim().parse()?;
    if !column.def().sortable {
        eyre::bail!("Column '{}' is not sortable", column);
    }
    Ok((column, direction))
}

/// Replay browse options onto the table as setter calls
///
/// Filters go first so that the page index is applied to the final filtered
/// rows.
pub fn apply_browse_options(table: &mut DataTable, options: &BrowseOptions) -> Result<()> {
    if let Some(name) = &options.name {
        table.set_filter(ColumnId::WorkflowName.as_str(), FilterValue::text(name));
    }
    if let Some(description) = &options.description {
        table.set_filter(
            ColumnId::WorkflowDescription.as_str(),
            FilterValue::text(description),
        );
    }
    table.set_filter(
        ColumnId::NodeTypes.as_str(),
        FilterValue::values(options.node_types.iter().cloned()),
    );
    table.set_filter(
        ColumnId::CredentialsUsed.as_str(),
        FilterValue::values(options.credentials.iter().cloned()),
    );
    if let Some(search) = &options.search {
        table.set_global_filter(search.clone());
    }

    if let Some(spec) = &options.sort {
        let (column, direction) = parse_sort_spec(spec)
            .with_context(|| format!("Invalid sort spec: {}", spec))?;
        table.set_sort(column.as_str(), Some(direction));
    }

    for column in &options.hidden {
        if !table.set_visibility(column, false) {
            eyre::bail!("Column '{}' cannot be hidden", column);
        }
    }

    table.set_page(options.page);
    Ok(())
}

/// Render the visible columns of the current page as a text table
pub fn render_page(table: &DataTable) -> String {
    let columns = table.visible_columns();
    let rows = table.rows();

    let cells: Vec<Vec<String>> = rows
        .page
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|c| DataTable::cell_text(record, c.id))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(c.header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let format_row = |values: Vec<&str>| -> String {
        values
            .iter()
            .zip(&widths)
            .map(|(v, w)| format!("{:<width$}", v, width = *w))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::new();
    lines.push(format_row(columns.iter().map(|c| c.header).collect()));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );

    if cells.is_empty() {
        lines.push("No results.".to_string());
    } else {
        for row in &cells {
            lines.push(format_row(row.iter().map(String::as_str).collect()));
        }
    }

    lines.push(String::new());
    lines.push(rows.summary().to_string());
    if rows.page_count() > 0 {
        lines.push(format!(
            "Page {} of {}",
            rows.page_index + 1,
            rows.page_count()
        ));
    }

    lines.join("\n")
}

/// Render the filter-choice lists
pub fn render_options(table: &DataTable) -> String {
    let mut lines = Vec::new();
    for column in [ColumnId::NodeTypes, ColumnId::CredentialsUsed] {
        lines.push(format!("{}:", column.def().header));
        for value in table.options().for_column(column).unwrap_or_default() {
            lines.push(format!("  {}", value));
        }
    }
    lines.join("\n")
}

/// Render the column registry for the column menu
pub fn render_columns() -> String {
    let hideable: Vec<ColumnId> = hideable_columns().iter().map(|c| c.id).collect();
    crate::table::COLUMNS
        .iter()
        .map(|c| {
            format!(
                "{:<20} {:<14} sortable={:<5} hideable={}",
                c.id.as_str(),
                c.header,
                c.sortable,
                hideable.contains(&c.id)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Export one workflow from a snapshot file into `output_dir/workflow.json`
///
/// Every failure is logged before it is returned.
pub fn export_workflow(
    snapshot: impl AsRef<Path>,
    id: &str,
    output_dir: impl AsRef<Path>,
    config: TableConfig,
) -> Result<PathBuf> {
    let table = load_table(snapshot, config).inspect_err(|e| log::error!("{:#}", e))?;
    table.export_row(id, &DirectorySink::new(output_dir))
}

/// Operator-facing line for a failed export, including the full error chain
pub fn export_failure_message(error: &eyre::Report) -> String {
    format!("Export failed, no file was written: {:#}", error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::WorkflowRecord;

    fn table() -> DataTable {
        DataTable::new(
            vec![
                WorkflowRecord::new("1", "Sync CRM")
                    .with_node_count(5)
                    .with_node_types(["httpRequest"]),
                WorkflowRecord::new("2", "Digest")
                    .with_node_count(3)
                    .with_credentials(["Slack bot"]),
            ],
            TableConfig::default(),
        )
    }

    #[test]
    fn test_parse_sort_spec() {
        assert_eq!(
            parse_sort_spec("nodeCount:desc").unwrap(),
            (ColumnId::NodeCount, SortDirection::Descending)
        );
        assert_eq!(
            parse_sort_spec("workflowName").unwrap(),
            (ColumnId::WorkflowName, SortDirection::Ascending)
        );
        assert!(parse_sort_spec("nodeTypes").is_err());
        assert!(parse_sort_spec("nodeCount:sideways").is_err());
        assert!(parse_sort_spec("bogus").is_err());
    }

    #[test]
    fn test_apply_browse_options() {
        let mut table = table();
        let options = BrowseOptions {
            sort: Some("nodeCount".to_string()),
            hidden: vec!["credentialsUsed".to_string()],
            ..BrowseOptions::default()
        };

        apply_browse_options(&mut table, &options).unwrap();

        let rows = table.rows();
        assert_eq!(rows.page[0].id, "2");
        assert_eq!(table.visible_columns().len(), 4);
    }

    #[test]
    fn test_apply_rejects_hiding_name() {
        let mut table = table();
        let options = BrowseOptions {
            hidden: vec!["workflowName".to_string()],
            ..BrowseOptions::default()
        };
        assert!(apply_browse_options(&mut table, &options).is_err());
    }

    #[test]
    fn test_render_page() {
        let mut table = table();
        table.set_visibility("workflowDescription", false);
        let output = render_page(&table);

        assert!(output.starts_with("Workflow Name | Nodes | Node Types  | Credentials"));
        assert!(output.contains("Sync CRM"));
        assert!(output.contains("—"));
        assert!(output.contains("Showing 1–2 of 2 items"));
        assert!(output.contains("Page 1 of 1"));
    }

    #[test]
    fn test_render_empty_page() {
        let mut table = table();
        table.set_filter("workflowName", FilterValue::text("nothing"));
        let output = render_page(&table);

        assert!(output.contains("No results."));
        assert!(output.contains("Showing 0–0 of 0 filtered items (2 total)"));
        assert!(!output.contains("Page "));
    }

    #[test]
    fn test_render_options() {
        let output = render_options(&table());
        assert_eq!(output, "Node Types:\n  httpRequest\nCredentials:\n  Slack bot");
    }

    #[test]
    fn test_export_failure_message_names_cause() {
        let table = DataTable::new(
            vec![WorkflowRecord::new("1", "Broken").with_payload("{not json")],
            TableConfig::default(),
        );
        let temp = tempfile::TempDir::new().unwrap();
        let error = table
            .export_row("1", &DirectorySink::new(temp.path()))
            .unwrap_err();

        let message = export_failure_message(&error);
        assert!(message.starts_with("Export failed, no file was written: "));
        assert!(message.contains("Failed to export workflow 'Broken'"));
        assert!(message.contains("workflow payload is not valid JSON"));
    }

    #[test]
    fn test_render_columns() {
        let output = render_columns();
        assert_eq!(output.lines().count(), 5);
        assert!(output.contains("hideable=false"));
    }
}

//! Filter-choice option lists
//!
//! Options are derived from the full snapshot, never from the filtered rows,
//! so picking one value never makes the other values disappear from the
//! picker.

use super::column::{CellValue, ColumnId, ColumnKind};
use crate::record::WorkflowRecord;
use std::collections::BTreeSet;

/// Distinct values per multi-select column, sorted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub node_types: Vec<String>,
    pub credentials: Vec<String>,
}

impl FilterOptions {
    /// Collect the distinct values of every array column in the snapshot
    pub fn derive(snapshot: &[WorkflowRecord]) -> Self {
        let options = Self {
            node_types: distinct_values(snapshot, ColumnId::NodeTypes),
            credentials: distinct_values(snapshot, ColumnId::CredentialsUsed),
        };
        log::debug!(
            "Derived {} node type option(s) and {} credential option(s) from {} record(s)",
            options.node_types.len(),
            options.credentials.len(),
            snapshot.len()
        );
        options
    }

    /// Option list for a column, `None` for columns without a picker
    pub fn for_column(&self, column: ColumnId) -> Option<&[String]> {
        match column {
            ColumnId::NodeTypes => Some(&self.node_types),
            ColumnId::CredentialsUsed => Some(&self.credentials),
            _ => None,
        }
    }
}

/// Distinct values of one array column, in ordinal string order
pub fn distinct_values(snapshot: &[WorkflowRecord], column: ColumnId) -> Vec<String> {
    let def = column.def();
    if def.kind != ColumnKind::Array {
        return Vec::new();
    }

    let mut values = BTreeSet::new();
    for record in snapshot {
        if let CellValue::List(list) = def.value(record) {
            values.extend(list.iter().map(String::as_str));
        }
    }
    values.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> Vec<WorkflowRecord> {
        vec![
            WorkflowRecord::new("1", "A")
                .with_node_types(["set", "httpRequest", "set"])
                .with_credentials(["Slack bot"]),
            WorkflowRecord::new("2", "B").with_node_types(["cron"]),
            WorkflowRecord::new("3", "C")
                .with_node_types(["httpRequest"])
                .with_credentials(["OpenAi account", "Slack bot"]),
        ]
    }

    #[test]
    fn test_distinct_sorted() {
        let options = FilterOptions::derive(&snapshot());
        assert_eq!(options.node_types, vec!["cron", "httpRequest", "set"]);
        assert_eq!(options.credentials, vec!["OpenAi account", "Slack bot"]);
    }

    #[test]
    fn test_empty_snapshot() {
        let options = FilterOptions::derive(&[]);
        assert!(options.node_types.is_empty());
        assert!(options.credentials.is_empty());
    }

    #[test]
    fn test_for_column() {
        let options = FilterOptions::derive(&snapshot());
        assert_eq!(options.for_column(ColumnId::NodeTypes).map(|o| o.len()), Some(3));
        assert_eq!(options.for_column(ColumnId::WorkflowName), None);
        assert!(distinct_values(&snapshot(), ColumnId::NodeCount).is_empty());
    }
}

//! Column registry
//!
//! Every column the table knows about is described once in [`COLUMNS`]. The
//! descriptor decides how a column sorts, how it filters and whether the
//! operator may hide it.

use crate::record::WorkflowRecord;
use std::fmt;
use std::str::FromStr;

/// Identifier of a table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColumnId {
    WorkflowName,
    NodeCount,
    NodeTypes,
    CredentialsUsed,
    WorkflowDescription,
}

impl ColumnId {
    /// The identifier string used by setters and the CLI
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnId::WorkflowName => "workflowName",
            ColumnId::NodeCount => "nodeCount",
            ColumnId::NodeTypes => "nodeTypes",
            ColumnId::CredentialsUsed => "credentialsUsed",
            ColumnId::WorkflowDescription => "workflowDescription",
        }
    }

    /// Descriptor for this column
    pub fn def(&self) -> &'static ColumnDef {
        let index = match self {
            ColumnId::WorkflowName => 0,
            ColumnId::NodeCount => 1,
            ColumnId::NodeTypes => 2,
            ColumnId::CredentialsUsed => 3,
            ColumnId::WorkflowDescription => 4,
        };
        &COLUMNS[index]
    }

    /// Look up a column by its identifier string
    ///
    /// Returns `None` for identifiers the registry does not know.
    pub fn lookup(id: &str) -> Option<Self> {
        id.parse().ok()
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnId {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        COLUMNS
            .iter()
            .map(|c| c.id)
            .find(|id| id.as_str() == s)
            .ok_or_else(|| eyre::eyre!("Unknown column: {}", s))
    }
}

/// What kind of value a column holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Free text, filtered by substring
    Text,
    /// Non-negative integer
    Numeric,
    /// Sequence of strings, filtered by multi-select inclusion
    Array,
}

/// Which filter predicate applies to a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateKind {
    /// Case-insensitive substring containment
    Substring,
    /// Array inclusion, any/all chosen by [`ArrayMatch`](super::ArrayMatch)
    ArrayInclusion,
}

/// Static description of one column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub id: ColumnId,
    pub header: &'static str,
    pub kind: ColumnKind,
    pub sortable: bool,
    pub hideable: bool,
    pub predicate: Option<PredicateKind>,
}

/// All columns in display order
pub static COLUMNS: [ColumnDef; 5] = [
    ColumnDef {
        id: ColumnId::WorkflowName,
        header: "Workflow Name",
        kind: ColumnKind::Text,
        sortable: true,
        hideable: false,
        predicate: Some(PredicateKind::Substring),
    },
    ColumnDef {
        id: ColumnId::NodeCount,
        header: "Nodes",
        kind: ColumnKind::Numeric,
        sortable: true,
        hideable: true,
        predicate: None,
    },
    ColumnDef {
        id: ColumnId::NodeTypes,
        header: "Node Types",
        kind: ColumnKind::Array,
        sortable: false,
        hideable: true,
        predicate: Some(PredicateKind::ArrayInclusion),
    },
    ColumnDef {
        id: ColumnId::CredentialsUsed,
        header: "Credentials",
        kind: ColumnKind::Array,
        sortable: false,
        hideable: true,
        predicate: Some(PredicateKind::ArrayInclusion),
    },
    ColumnDef {
        id: ColumnId::WorkflowDescription,
        header: "Description",
        kind: ColumnKind::Text,
        sortable: true,
        hideable: true,
        predicate: Some(PredicateKind::Substring),
    },
];

/// Array columns whose values feed the global search
pub const GLOBAL_SEARCH_COLUMNS: [ColumnId; 2] = [ColumnId::NodeTypes, ColumnId::CredentialsUsed];

/// Borrowed view of one cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue<'a> {
    Text(&'a str),
    Number(u64),
    List(&'a [String]),
}

impl<'a> CellValue<'a> {
    /// Plain-text rendering, `—` for an empty list
    pub fn display(&self) -> String {
        match self {
            CellValue::Text(s) => s.to_string(),
            CellValue::Number(n) => n.to_string(),
            CellValue::List(values) if values.is_empty() => "—".to_string(),
            CellValue::List(values) => values.join(", "),
        }
    }
}

impl ColumnDef {
    /// Read this column's value out of a record
    pub fn value<'a>(&self, record: &'a WorkflowRecord) -> CellValue<'a> {
        match self.id {
            ColumnId::WorkflowName => CellValue::Text(&record.name),
            ColumnId::NodeCount => CellValue::Number(record.node_count),
            ColumnId::NodeTypes => CellValue::List(&record.node_types),
            ColumnId::CredentialsUsed => CellValue::List(&record.credentials_used),
            ColumnId::WorkflowDescription => CellValue::Text(&record.description),
        }
    }
}

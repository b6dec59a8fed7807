//! Sort state and row comparators

use super::column::{CellValue, ColumnId};
use crate::record::WorkflowRecord;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("asc"),
            SortDirection::Descending => f.write_str("desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => eyre::bail!("Invalid sort direction '{}', expected 'asc' or 'desc'", other),
        }
    }
}

/// The single active sort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSort {
    pub column: ColumnId,
    pub direction: SortDirection,
}

/// At most one active sort; `None` keeps snapshot order
pub type SortState = Option<ColumnSort>;

/// Next state of the header toggle: none, ascending, descending, none
///
/// Toggling a column other than the one currently sorted starts over at
/// ascending.
pub fn next_toggle(current: SortState, column: ColumnId) -> SortState {
    match current {
        Some(ColumnSort {
            column: active,
            direction,
        }) if active == column => match direction {
            SortDirection::Ascending => Some(ColumnSort {
                column,
                direction: SortDirection::Descending,
            }),
            SortDirection::Descending => None,
        },
        _ => Some(ColumnSort {
            column,
            direction: SortDirection::Ascending,
        }),
    }
}

/// Locale-style string ordering
///
/// Letters compare case-insensitively first so "apple" sorts next to
/// "Apple"; exact ordinal order breaks the remaining ties.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Compare two records on one column, ascending
pub fn compare_records(a: &WorkflowRecord, b: &WorkflowRecord, column: ColumnId) -> Ordering {
    let def = column.def();
    match (def.value(a), def.value(b)) {
        (CellValue::Number(x), CellValue::Number(y)) => x.cmp(&y),
        (CellValue::Text(x), CellValue::Text(y)) => locale_cmp(x, y),
        (CellValue::List(x), CellValue::List(y)) => x.len().cmp(&y.len()),
        _ => Ordering::Equal,
    }
}

/// Stable sort of rows; ties keep their incoming order in both directions
pub fn sort_rows(rows: &mut [&WorkflowRecord], sort: &ColumnSort) {
    rows.sort_by(|a, b| {
        let ordering = compare_records(a, b, sort.column);
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

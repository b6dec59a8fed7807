//! Row pipeline
//!
//! Derives the rendered rows from the snapshot in a fixed stage order:
//!
//! 1. Core: the snapshot as-is
//! 2. Sorted: stable sort on the active column, if any
//! 3. Filtered: conjunction of every active filter
//! 4. Paginated: the current page window of the filtered rows
//!
//! Every stage is a pure function of the previous stage and the current
//! state, so a full run can be repeated after each state change.

use super::filter::{ArrayMatch, FilterState};
use super::pagination::PaginationState;
use super::sort::{SortState, sort_rows};
use super::state::TableState;
use crate::record::WorkflowRecord;
use std::fmt;

pub fn core_rows(snapshot: &[WorkflowRecord]) -> Vec<&WorkflowRecord> {
    snapshot.iter().collect()
}

pub fn sorted_rows<'a>(mut rows: Vec<&'a WorkflowRecord>, sort: SortState) -> Vec<&'a WorkflowRecord> {
    if let Some(sort) = sort {
        sort_rows(&mut rows, &sort);
    }
    rows
}

pub fn filtered_rows<'a>(
    rows: Vec<&'a WorkflowRecord>,
    filters: &FilterState,
    array_match: ArrayMatch,
) -> Vec<&'a WorkflowRecord> {
    rows.into_iter()
        .filter(|record| filters.matches(record, array_match))
        .collect()
}

pub fn paginated_rows<'a>(
    rows: &[&'a WorkflowRecord],
    pagination: &PaginationState,
) -> Vec<&'a WorkflowRecord> {
    rows[pagination.window(rows.len())].to_vec()
}

/// Output of one full pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct RowModel<'a> {
    /// Records in the snapshot
    pub total: usize,
    /// Sorted and filtered rows, before pagination
    pub filtered: Vec<&'a WorkflowRecord>,
    /// Rows on the current page
    pub page: Vec<&'a WorkflowRecord>,
    pub page_index: usize,
    pub page_size: usize,
}

impl<'a> RowModel<'a> {
    /// Run every stage against the snapshot
    pub fn build(
        snapshot: &'a [WorkflowRecord],
        state: &TableState,
        array_match: ArrayMatch,
    ) -> Self {
        let core = core_rows(snapshot);
        let sorted = sorted_rows(core, state.sort());
        let filtered = filtered_rows(sorted, state.filters(), array_match);
        let page = paginated_rows(&filtered, state.pagination());

        log::debug!(
            "Row model: {} total, {} filtered, {} on page {}",
            snapshot.len(),
            filtered.len(),
            page.len(),
            state.pagination().page_index()
        );

        Self {
            total: snapshot.len(),
            filtered,
            page,
            page_index: state.pagination().page_index(),
            page_size: state.pagination().page_size(),
        }
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn page_count(&self) -> usize {
        PaginationState::new(self.page_size).page_count(self.filtered.len())
    }

    pub fn is_empty(&self) -> bool {
        self.page.is_empty()
    }

    /// Summary line; a page past the end reports `0–0`
    pub fn summary(&self) -> PageSummary {
        let (start, end) = if self.page.is_empty() {
            (0, 0)
        } else {
            let offset = self.page_index * self.page_size;
            (offset + 1, offset + self.page.len())
        };
        PageSummary {
            start,
            end,
            filtered: self.filtered.len(),
            total: self.total,
        }
    }
}

/// The "Showing start–end of N" line under the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSummary {
    pub start: usize,
    pub end: usize,
    pub filtered: usize,
    pub total: usize,
}

impl fmt::Display for PageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.filtered == self.total {
            write!(f, "Showing {}–{} of {} items", self.start, self.end, self.total)
        } else {
            write!(
                f,
                "Showing {}–{} of {} filtered items ({} total)",
                self.start, self.end, self.filtered, self.total
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::FilterValue;

    fn snapshot() -> Vec<WorkflowRecord> {
        vec![
            WorkflowRecord::new("1", "Delta").with_node_count(4),
            WorkflowRecord::new("2", "alpha").with_node_count(9),
            WorkflowRecord::new("3", "Charlie").with_node_count(1),
            WorkflowRecord::new("4", "bravo").with_node_count(9),
        ]
    }

    fn ids(rows: &[&WorkflowRecord]) -> Vec<String> {
        rows.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_unsorted_keeps_snapshot_order() {
        let data = snapshot();
        let rows = sorted_rows(core_rows(&data), None);
        assert_eq!(ids(&rows), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_text_sort_is_case_insensitive() {
        let data = snapshot();
        let mut state = TableState::new(10);
        state.toggle_sort("workflowName");
        let model = RowModel::build(&data, &state, ArrayMatch::Any);
        assert_eq!(ids(&model.page), vec!["2", "4", "3", "1"]);
    }

    #[test]
    fn test_pages_cover_filtered_rows_once() {
        let data = snapshot();
        let mut state = TableState::new(3);
        state.toggle_sort("nodeCount");

        let mut seen = Vec::new();
        let first = RowModel::build(&data, &state, ArrayMatch::Any);
        for page in 0..first.page_count() {
            state.set_page(page);
            let model = RowModel::build(&data, &state, ArrayMatch::Any);
            seen.extend(ids(&model.page));
        }

        assert_eq!(seen, ids(&first.filtered));
    }

    #[test]
    fn test_summary_text() {
        let data = snapshot();
        let mut state = TableState::new(3);
        let model = RowModel::build(&data, &state, ArrayMatch::Any);
        assert_eq!(model.summary().to_string(), "Showing 1–3 of 4 items");

        state.set_filter("workflowName", FilterValue::text("a"));
        state.set_page(1);
        let model = RowModel::build(&data, &state, ArrayMatch::Any);
        assert_eq!(model.filtered_count(), 4);

        state.set_filter("workflowName", FilterValue::text("ha"));
        state.set_page(0);
        let model = RowModel::build(&data, &state, ArrayMatch::Any);
        assert_eq!(
            model.summary().to_string(),
            "Showing 1–2 of 2 filtered items (4 total)"
        );
    }

    #[test]
    fn test_page_past_end() {
        let data = snapshot();
        let mut state = TableState::new(3);
        state.set_page(5);
        let model = RowModel::build(&data, &state, ArrayMatch::Any);

        assert!(model.is_empty());
        assert_eq!(model.page_count(), state.pagination().page_count(data.len()));
        assert_eq!(model.page_count(), 2);
        assert_eq!(model.summary().to_string(), "Showing 0–0 of 4 items");
    }

    #[test]
    fn test_empty_result_summary() {
        let data = snapshot();
        let mut state = TableState::new(3);
        state.set_filter("workflowName", FilterValue::text("zzz"));
        let model = RowModel::build(&data, &state, ArrayMatch::Any);
        assert!(model.is_empty());
        assert_eq!(model.page_count(), 0);
        assert_eq!(model.summary().start, 0);
        assert_eq!(model.summary().end, 0);
    }
}

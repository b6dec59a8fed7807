//! Table state manager
//!
//! Holds the four independent state slices (sort, filter, visibility,
//! pagination) and the setters that move between them. Setters take column
//! identifiers as strings, the way a header click or a picker hands them
//! over. A setter that cannot apply its change leaves every slice untouched
//! and returns `false`.

use super::column::ColumnId;
use super::filter::{FilterState, FilterValue};
use super::pagination::PaginationState;
use super::sort::{ColumnSort, SortDirection, SortState, next_toggle};
use super::visibility::VisibilityState;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableState {
    sort: SortState,
    filters: FilterState,
    visibility: VisibilityState,
    pagination: PaginationState,
}

impl TableState {
    /// Empty state with a fixed page size
    pub fn new(page_size: usize) -> Self {
        Self {
            sort: None,
            filters: FilterState::new(),
            visibility: VisibilityState::new(),
            pagination: PaginationState::new(page_size),
        }
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn visibility(&self) -> &VisibilityState {
        &self.visibility
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    /// Set or clear the sort on a sortable column
    pub fn set_sort(&mut self, column: &str, direction: Option<SortDirection>) -> bool {
        let Some(id) = sortable_column(column) else {
            return false;
        };
        self.sort = direction.map(|direction| ColumnSort {
            column: id,
            direction,
        });
        log::debug!("Sort set to {:?}", self.sort);
        true
    }

    /// Advance the header toggle for a column
    pub fn toggle_sort(&mut self, column: &str) -> bool {
        let Some(id) = sortable_column(column) else {
            return false;
        };
        self.sort = next_toggle(self.sort, id);
        log::debug!("Sort toggled to {:?}", self.sort);
        true
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// Set the filter value of a column; an empty value removes the filter
    pub fn set_filter(&mut self, column: &str, value: FilterValue) -> bool {
        let Some(id) = known_column(column) else {
            return false;
        };
        let def = id.def();
        if def.predicate.is_none() || !value.fits(def.kind) {
            log::warn!(
                "Ignoring filter on column '{}': {:?} does not fit a {:?} column",
                column,
                value,
                def.kind
            );
            return false;
        }
        log::debug!("Filter on '{}' set to {:?}", column, value);
        self.filters.insert(id, value);
        true
    }

    /// Set the global search query across the array columns
    pub fn set_global_filter(&mut self, query: impl Into<String>) {
        self.filters.set_global(query);
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    /// Show or hide a column
    pub fn set_visibility(&mut self, column: &str, visible: bool) -> bool {
        let Some(id) = known_column(column) else {
            return false;
        };
        if !self.visibility.set(id, visible) {
            log::warn!("Column '{}' cannot be hidden", column);
            return false;
        }
        true
    }

    /// Jump to a page; the index is not checked against the row count
    pub fn set_page(&mut self, index: usize) {
        self.pagination.set_page(index);
    }

    /// Move forward one page if `rows` rows leave room for it
    pub fn next_page(&mut self, rows: usize) -> bool {
        if !self.pagination.can_next_page(rows) {
            return false;
        }
        self.pagination.set_page(self.pagination.page_index() + 1);
        true
    }

    pub fn previous_page(&mut self) -> bool {
        if !self.pagination.can_previous_page() {
            return false;
        }
        self.pagination.set_page(self.pagination.page_index() - 1);
        true
    }

    pub(crate) fn clamp_page(&mut self, rows: usize) -> bool {
        self.pagination.clamp(rows)
    }
}

fn known_column(column: &str) -> Option<ColumnId> {
    let id = ColumnId::lookup(column);
    if id.is_none() {
        log::warn!("Ignoring unknown column '{}'", column);
    }
    id
}

fn sortable_column(column: &str) -> Option<ColumnId> {
    let id = known_column(column)?;
    if !id.def().sortable {
        log::warn!("Column '{}' is not sortable", column);
        return None;
    }
    Some(id)
}

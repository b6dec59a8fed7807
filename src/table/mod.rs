//! Client-side row processing for the workflow table
//!
//! This module holds everything between the snapshot and the rendered page:
//! - Column registry
//! - Filter predicates and filter state
//! - Sort, visibility and pagination state
//! - Filter-choice option lists
//! - The row pipeline (core, sorted, filtered, paginated)

mod column;
mod data_table;
mod filter;
mod options;
mod pagination;
mod pipeline;
mod sort;
mod state;
mod visibility;

pub use column::{
    COLUMNS, CellValue, ColumnDef, ColumnId, ColumnKind, GLOBAL_SEARCH_COLUMNS, PredicateKind,
};
pub use data_table::DataTable;
pub use filter::{
    ArrayMatch, FilterState, FilterValue, matches_all, matches_any, matches_global,
    matches_substring,
};
pub use options::{FilterOptions, distinct_values};
pub use pagination::{DEFAULT_PAGE_SIZE, PaginationState};
pub use pipeline::{
    PageSummary, RowModel, core_rows, filtered_rows, paginated_rows, sorted_rows,
};
pub use sort::{ColumnSort, SortDirection, SortState, compare_records, locale_cmp, next_toggle};
pub use state::TableState;
pub use visibility::{VisibilityState, hideable_columns};

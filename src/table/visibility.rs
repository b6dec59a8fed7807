//! Column visibility

use super::column::{COLUMNS, ColumnDef, ColumnId};
use std::collections::HashMap;

/// Visibility per column; columns without an entry are visible
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityState {
    columns: HashMap<ColumnId, bool>,
}

impl VisibilityState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self, column: ColumnId) -> bool {
        if !column.def().hideable {
            return true;
        }
        self.columns.get(&column).copied().unwrap_or(true)
    }

    /// Record visibility for a column
    ///
    /// Returns `false` and leaves the state alone for a column that cannot be
    /// hidden.
    pub(crate) fn set(&mut self, column: ColumnId, visible: bool) -> bool {
        if !column.def().hideable {
            return false;
        }
        self.columns.insert(column, visible);
        true
    }

    /// Visible columns in display order
    pub fn visible_columns(&self) -> Vec<&'static ColumnDef> {
        COLUMNS.iter().filter(|c| self.is_visible(c.id)).collect()
    }
}

/// Columns the operator may toggle, in display order
pub fn hideable_columns() -> Vec<&'static ColumnDef> {
    COLUMNS.iter().filter(|c| c.hideable).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_visible() {
        let state = VisibilityState::new();
        assert_eq!(state.visible_columns().len(), COLUMNS.len());
    }

    #[test]
    fn test_hide_and_show() {
        let mut state = VisibilityState::new();
        assert!(state.set(ColumnId::CredentialsUsed, false));
        assert!(!state.is_visible(ColumnId::CredentialsUsed));
        assert!(state.set(ColumnId::CredentialsUsed, true));
        assert!(state.is_visible(ColumnId::CredentialsUsed));
    }

    #[test]
    fn test_name_cannot_be_hidden() {
        let mut state = VisibilityState::new();
        assert!(!state.set(ColumnId::WorkflowName, false));
        assert!(state.is_visible(ColumnId::WorkflowName));
        assert!(!hideable_columns().iter().any(|c| c.id == ColumnId::WorkflowName));
    }
}

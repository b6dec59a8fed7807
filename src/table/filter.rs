//! Filter predicates and filter state
//!
//! Predicates are pure functions over one record field. An empty filter
//! value never constrains anything: every predicate returns `true` for an
//! empty query or an empty selection.

use super::column::{CellValue, ColumnId, ColumnKind, GLOBAL_SEARCH_COLUMNS, PredicateKind};
use crate::record::WorkflowRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Case-insensitive substring containment
pub fn matches_substring(field: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    field.to_lowercase().contains(&query.to_lowercase())
}

/// True when the field shares at least one value with the selection
pub fn matches_any(field: &[String], selected: &[String]) -> bool {
    if selected.is_empty() {
        return true;
    }
    let field: Vec<String> = field.iter().map(|v| v.to_lowercase()).collect();
    selected
        .iter()
        .map(|s| s.to_lowercase())
        .any(|s| field.contains(&s))
}

/// True when every selected value appears in the field
pub fn matches_all(field: &[String], selected: &[String]) -> bool {
    if selected.is_empty() {
        return true;
    }
    let field: Vec<String> = field.iter().map(|v| v.to_lowercase()).collect();
    selected
        .iter()
        .map(|s| s.to_lowercase())
        .all(|s| field.contains(&s))
}

/// Substring search over several array fields joined into one string
///
/// A blank query matches everything.
pub fn matches_global(fields: &[&[String]], query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let haystack = fields
        .iter()
        .flat_map(|f| f.iter())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    haystack.contains(&query.to_lowercase())
}

/// How multi-select columns combine their selected values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrayMatch {
    /// Record matches if it contains any selected value
    #[default]
    Any,
    /// Record matches only if it contains every selected value
    All,
}

impl ArrayMatch {
    pub fn matches(&self, field: &[String], selected: &[String]) -> bool {
        match self {
            ArrayMatch::Any => matches_any(field, selected),
            ArrayMatch::All => matches_all(field, selected),
        }
    }
}

impl FromStr for ArrayMatch {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "any" => Ok(ArrayMatch::Any),
            "all" => Ok(ArrayMatch::All),
            other => eyre::bail!("Invalid array match mode '{}', expected 'any' or 'all'", other),
        }
    }
}

/// Filter value for one column, shaped by the column kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// Substring query for text columns
    Text(String),
    /// Selected values for multi-select columns, in selection order
    Values(Vec<String>),
}

impl FilterValue {
    pub fn text(query: impl Into<String>) -> Self {
        FilterValue::Text(query.into())
    }

    /// Build a selection, dropping repeated values but keeping first-seen order
    pub fn values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selected: Vec<String> = Vec::new();
        for value in values {
            let value = value.into();
            if !selected.contains(&value) {
                selected.push(value);
            }
        }
        FilterValue::Values(selected)
    }

    /// An empty value places no constraint on its column
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Text(query) => query.is_empty(),
            FilterValue::Values(selected) => selected.is_empty(),
        }
    }

    /// Whether this value shape fits the given column kind
    pub fn fits(&self, kind: ColumnKind) -> bool {
        matches!(
            (self, kind),
            (FilterValue::Text(_), ColumnKind::Text) | (FilterValue::Values(_), ColumnKind::Array)
        )
    }
}

/// Active filters keyed by column, plus the optional global search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    columns: HashMap<ColumnId, FilterValue>,
    global: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value for a column, if one is active
    pub fn get(&self, column: ColumnId) -> Option<&FilterValue> {
        self.columns.get(&column)
    }

    /// Selected values of a multi-select column, empty when unset
    pub fn selected(&self, column: ColumnId) -> &[String] {
        match self.columns.get(&column) {
            Some(FilterValue::Values(selected)) => selected,
            _ => &[],
        }
    }

    pub fn global(&self) -> &str {
        &self.global
    }

    /// Store a value for a column; an empty value clears the entry
    ///
    /// Callers are expected to have checked the value against the column
    /// kind (see [`FilterValue::fits`]).
    pub(crate) fn insert(&mut self, column: ColumnId, value: FilterValue) {
        if value.is_empty() {
            self.columns.remove(&column);
        } else {
            self.columns.insert(column, value);
        }
    }

    pub(crate) fn set_global(&mut self, query: impl Into<String>) {
        self.global = query.into();
    }

    /// Drop every column filter and the global search
    pub fn clear(&mut self) {
        self.columns.clear();
        self.global.clear();
    }

    /// Number of columns with an active filter
    pub fn active_count(&self) -> usize {
        self.columns.len()
    }

    /// Conjunction of every active predicate against one record
    pub fn matches(&self, record: &WorkflowRecord, array_match: ArrayMatch) -> bool {
        let columns_match = self.columns.iter().all(|(column, value)| {
            let def = column.def();
            match (def.predicate, def.value(record), value) {
                (Some(PredicateKind::Substring), CellValue::Text(field), FilterValue::Text(q)) => {
                    matches_substring(field, q)
                }
                (
                    Some(PredicateKind::ArrayInclusion),
                    CellValue::List(field),
                    FilterValue::Values(selected),
                ) => array_match.matches(field, selected),
                // Values that reach here were rejected by the setter; ignore them
                _ => true,
            }
        });

        if !columns_match {
            return false;
        }

        let fields: Vec<&[String]> = GLOBAL_SEARCH_COLUMNS
            .iter()
            .filter_map(|c| match c.def().value(record) {
                CellValue::List(values) => Some(values),
                _ => None,
            })
            .collect();
        matches_global(&fields, &self.global)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_substring_case_insensitive() {
        assert!(matches_substring("Sync CRM Contacts", "crm"));
        assert!(matches_substring("Sync CRM Contacts", "SYNC c"));
        assert!(!matches_substring("Sync CRM Contacts", "slack"));
    }

    #[test]
    fn test_empty_filters_match_all() {
        assert!(matches_substring("anything", ""));
        assert!(matches_substring("", ""));
        assert!(matches_any(&[], &[]));
        assert!(matches_any(&strings(&["a"]), &[]));
        assert!(matches_all(&[], &[]));
        assert!(matches_global(&[], ""));
        assert!(matches_global(&[], "   "));
    }

    #[test]
    fn test_any_requires_intersection() {
        let field = strings(&["n8n-nodes-base.httpRequest", "n8n-nodes-base.set"]);
        assert!(matches_any(&field, &strings(&["N8N-NODES-BASE.SET"])));
        assert!(matches_any(&field, &strings(&["missing", "n8n-nodes-base.set"])));
        assert!(!matches_any(&field, &strings(&["missing"])));
        assert!(!matches_any(&[], &strings(&["missing"])));
    }

    #[test]
    fn test_any_is_exact_element_match() {
        let field = strings(&["httpRequest"]);
        assert!(!matches_any(&field, &strings(&["http"])));
    }

    #[test]
    fn test_all_requires_subset() {
        let field = strings(&["a", "B", "c"]);
        assert!(matches_all(&field, &strings(&["a", "b"])));
        assert!(matches_all(&field, &strings(&["C"])));
        assert!(!matches_all(&field, &strings(&["a", "d"])));
        assert!(!matches_all(&[], &strings(&["a"])));
    }

    #[test]
    fn test_global_spans_fields() {
        let types = strings(&["httpRequest", "slack"]);
        let creds = strings(&["OpenAi account"]);
        let fields: Vec<&[String]> = vec![&types, &creds];
        assert!(matches_global(&fields, "openai"));
        assert!(matches_global(&fields, " SLACK "));
        assert!(!matches_global(&fields, "postgres"));
    }

    #[test]
    fn test_filter_value_dedups_in_order() {
        let value = FilterValue::values(["b", "a", "b"]);
        assert_eq!(value, FilterValue::Values(strings(&["b", "a"])));
    }

    #[test]
    fn test_filter_value_fits_kind() {
        assert!(FilterValue::text("x").fits(ColumnKind::Text));
        assert!(!FilterValue::text("x").fits(ColumnKind::Array));
        assert!(FilterValue::values(["x"]).fits(ColumnKind::Array));
        assert!(!FilterValue::values(["x"]).fits(ColumnKind::Numeric));
    }

    #[test]
    fn test_empty_value_clears_entry() {
        let mut state = FilterState::new();
        state.insert(ColumnId::NodeTypes, FilterValue::values(["a"]));
        assert_eq!(state.active_count(), 1);
        state.insert(ColumnId::NodeTypes, FilterValue::values(Vec::<String>::new()));
        assert_eq!(state.active_count(), 0);
        assert!(state.selected(ColumnId::NodeTypes).is_empty());
    }

    #[test]
    fn test_state_conjunction() {
        let record = WorkflowRecord::new("1", "Slack alerts")
            .with_node_types(["slack", "cron"])
            .with_credentials(["Slack bot"]);

        let mut state = FilterState::new();
        assert!(state.matches(&record, ArrayMatch::Any));

        state.insert(ColumnId::WorkflowName, FilterValue::text("alert"));
        state.insert(ColumnId::NodeTypes, FilterValue::values(["CRON"]));
        assert!(state.matches(&record, ArrayMatch::Any));

        state.insert(ColumnId::CredentialsUsed, FilterValue::values(["github"]));
        assert!(!state.matches(&record, ArrayMatch::Any));
    }

    #[test]
    fn test_state_array_match_mode() {
        let record = WorkflowRecord::new("1", "Flow").with_node_types(["slack"]);
        let mut state = FilterState::new();
        state.insert(ColumnId::NodeTypes, FilterValue::values(["slack", "cron"]));

        assert!(state.matches(&record, ArrayMatch::Any));
        assert!(!state.matches(&record, ArrayMatch::All));
    }

    #[test]
    fn test_state_global_search() {
        let record = WorkflowRecord::new("1", "Flow")
            .with_node_types(["slack"])
            .with_credentials(["Notion token"]);
        let mut state = FilterState::new();

        state.set_global("notion");
        assert!(state.matches(&record, ArrayMatch::Any));
        state.set_global("github");
        assert!(!state.matches(&record, ArrayMatch::Any));
    }

    #[test]
    fn test_array_match_from_str() {
        assert_eq!("any".parse::<ArrayMatch>().unwrap(), ArrayMatch::Any);
        assert_eq!(" ALL ".parse::<ArrayMatch>().unwrap(), ArrayMatch::All);
        assert!("some".parse::<ArrayMatch>().is_err());
    }
}

//! The mutable query configuration of a catalogue session.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::facets::FacetField;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterState {
    /// Search box in the top bar.
    pub global_query: String,
    /// Search box inside the filter panel.
    pub local_query: String,
    pub bookmarks_only: bool,
    /// Only non-empty sets are stored.
    pub facet_filters: BTreeMap<FacetField, BTreeSet<String>>,
}

impl FilterState {
    pub fn with_global_query(query: impl Into<String>) -> Self {
        Self { global_query: query.into(), ..Default::default() }
    }

    pub fn selected(&self, field: FacetField) -> Option<&BTreeSet<String>> {
        self.facet_filters.get(&field)
    }

    pub fn is_value_selected(&self, field: FacetField, value: &str) -> bool {
        self.selected(field).is_some_and(|values| values.contains(value))
    }

    pub fn selected_count(&self, field: FacetField) -> usize {
        self.selected(field).map_or(0, BTreeSet::len)
    }

    /// Flips membership of `value` and returns whether it is now selected.
    pub fn toggle_facet_value(&mut self, field: FacetField, value: &str) -> bool {
        let entry = self.facet_filters.entry(field).or_default();
        let now_selected = if entry.contains(value) {
            entry.remove(value);
            false
        } else {
            entry.insert(value.to_string());
            true
        };
        if entry.is_empty() {
            self.facet_filters.remove(&field);
        }
        now_selected
    }

    /// Resets the filter panel: facet selections and the local query.
    /// The global query and the bookmarks-only toggle are kept.
    pub fn clear_filters(&mut self) {
        self.facet_filters.clear();
        self.local_query.clear();
    }

    pub fn active_filter_count(&self) -> usize {
        self.facet_filters.values().map(BTreeSet::len).sum()
    }

    pub fn has_text_query(&self) -> bool {
        !self.global_query.is_empty() || !self.local_query.is_empty()
    }

    /// Drives the "(filtered)" marker next to the result count.
    pub fn is_filtered(&self) -> bool {
        self.has_text_query() || self.active_filter_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn toggle_twice_restores_state() {
        let mut filters = FilterState::default();
        assert!(filters.toggle_facet_value(FacetField::Unit, "Percent"));
        assert!(filters.is_value_selected(FacetField::Unit, "Percent"));
        assert!(!filters.toggle_facet_value(FacetField::Unit, "Percent"));
        assert_eq!(filters, FilterState::default());
    }

    #[test]
    fn clear_filters_keeps_global_query_and_bookmarks_only() {
        let mut filters = FilterState {
            global_query: "gdp".to_string(),
            local_query: "india".to_string(),
            bookmarks_only: true,
            ..Default::default()
        };
        filters.toggle_facet_value(FacetField::Frequency, "Monthly");
        filters.toggle_facet_value(FacetField::Category, "Prices");
        filters.toggle_facet_value(FacetField::Category, "Money");
        assert_eq!(filters.active_filter_count(), 3);

        filters.clear_filters();
        assert_eq!(filters.global_query, "gdp");
        assert!(filters.bookmarks_only);
        assert!(filters.local_query.is_empty());
        assert_eq!(filters.active_filter_count(), 0);
        assert!(filters.is_filtered());
    }

    #[test]
    fn decodes_partial_state() {
        let filters: FilterState = serde_json::from_str(r#"{"global_query": "cpi"}"#).unwrap();
        assert_eq!(filters, FilterState::with_global_query("cpi"));
    }
}

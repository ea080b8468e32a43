//! Boolean filter pipeline over the active item list.
//!
//! Predicate categories are ANDed; values inside one facet set are ORed.
//! A category with nothing configured does not restrict. Output keeps the
//! input order.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalogue_item::CatalogueItem;
use crate::facets::FacetField;
use crate::filter_state::FilterState;
use crate::selection::{SelectionRole, SelectionSets};

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate<'f> {
    BookmarksOnly,
    GlobalQuery(&'f str),
    LocalQuery(&'f str),
    Facet(FacetField, &'f BTreeSet<String>),
}

impl Predicate<'_> {
    pub fn matches(&self, item: &CatalogueItem, selections: &SelectionSets) -> bool {
        match self {
            Predicate::BookmarksOnly => selections.contains(SelectionRole::Bookmarked, &item.id),
            Predicate::GlobalQuery(query) | Predicate::LocalQuery(query) => text_matches(item, query),
            Predicate::Facet(field, values) => item.facet_value(*field).is_some_and(|value| values.contains(value)),
        }
    }
}

/// Case-insensitive substring match against title, category, sub-category,
/// frequency and unit. A blank query matches everything.
pub fn text_matches(item: &CatalogueItem, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    item.text_fields().any(|field| field.to_lowercase().contains(&query))
}

/// The predicates `filters` turns on, in evaluation order.
pub fn active_predicates(filters: &FilterState) -> Vec<Predicate<'_>> {
    let mut predicates = Vec::new();
    if filters.bookmarks_only {
        predicates.push(Predicate::BookmarksOnly);
    }
    if !filters.global_query.trim().is_empty() {
        predicates.push(Predicate::GlobalQuery(&filters.global_query));
    }
    if !filters.local_query.trim().is_empty() {
        predicates.push(Predicate::LocalQuery(&filters.local_query));
    }
    for field in FacetField::ALL {
        if let Some(values) = filters.selected(field) {
            if !values.is_empty() {
                predicates.push(Predicate::Facet(field, values));
            }
        }
    }
    predicates
}

pub fn filter_items<'a>(items: &'a [CatalogueItem], filters: &FilterState, selections: &SelectionSets) -> Vec<&'a CatalogueItem> {
    let predicates = active_predicates(filters);
    items
        .iter()
        .filter(|item| predicates.iter().all(|predicate| predicate.matches(item, selections)))
        .collect()
}

/// Why a filtered list came back empty, for the empty-state panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmptyResults {
    NoBookmarks { facets_active: bool },
    NoMatches { facets_active: bool },
    NoItems { facets_active: bool },
}

impl EmptyResults {
    pub fn classify(filters: &FilterState) -> Self {
        let facets_active = filters.active_filter_count() > 0;
        if filters.bookmarks_only {
            EmptyResults::NoBookmarks { facets_active }
        } else if filters.has_text_query() {
            EmptyResults::NoMatches { facets_active }
        } else {
            EmptyResults::NoItems { facets_active }
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            EmptyResults::NoBookmarks { .. } => "No bookmarked items",
            EmptyResults::NoMatches { .. } => "No results found",
            EmptyResults::NoItems { .. } => "No items found",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            EmptyResults::NoBookmarks { .. } => "Start bookmarking items to see them here",
            EmptyResults::NoMatches { facets_active: true } | EmptyResults::NoItems { facets_active: true } => "Try adjusting your filters",
            _ => "Try adjusting your search terms",
        }
    }

    /// Whether to offer a "Clear Filters" button: any selected facet value,
    /// whatever else is active.
    pub fn offers_clear_filters(&self) -> bool {
        match *self {
            EmptyResults::NoBookmarks { facets_active } | EmptyResults::NoMatches { facets_active } | EmptyResults::NoItems { facets_active } => facets_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue_item::ItemId;
    use pretty_assertions::assert_eq;

    fn ids(items: &[&CatalogueItem]) -> Vec<String> {
        items.iter().map(|item| item.id.to_string()).collect()
    }

    fn example_items() -> Vec<CatalogueItem> {
        vec![
            CatalogueItem::new("a", "GDP Growth").with_frequency("Q"),
            CatalogueItem::new("b", "CPI Index").with_frequency("M"),
            CatalogueItem::new("c", "GDP Deflator").with_frequency("Q"),
        ]
    }

    fn richer_items() -> Vec<CatalogueItem> {
        vec![
            CatalogueItem::new("1", "Repo Rate").with_category("Money").with_frequency("Daily").with_unit("Percent"),
            CatalogueItem::new("2", "Kerala GSDP").with_category("States").with_sub_category("Kerala").with_frequency("Annual").with_unit("INR Billion"),
            CatalogueItem::new("3", "Bank Credit").with_category("Money").with_frequency("Fortnightly").with_unit("INR Billion"),
            CatalogueItem::new("4", "Untagged series"),
            CatalogueItem::new("5", "Tamil Nadu GSDP").with_category("States").with_sub_category("Tamil Nadu").with_frequency("Annual"),
        ]
    }

    #[test]
    fn global_query_then_frequency_facet() {
        let items = example_items();
        let selections = SelectionSets::default();
        let mut filters = FilterState::with_global_query("gdp");
        assert_eq!(ids(&filter_items(&items, &filters, &selections)), vec!["a", "c"]);

        filters.toggle_facet_value(FacetField::Frequency, "Q");
        assert_eq!(ids(&filter_items(&items, &filters, &selections)), vec!["a", "c"]);

        filters.toggle_facet_value(FacetField::Frequency, "Q");
        filters.toggle_facet_value(FacetField::Frequency, "M");
        assert!(filter_items(&items, &filters, &selections).is_empty());
    }

    #[test]
    fn text_match_covers_all_searchable_fields() {
        let item = CatalogueItem::new("x", "Series").with_category("Prices").with_sub_category("Wholesale").with_frequency("Monthly").with_unit("Index");
        for query in ["series", "PRICES", "sale", "month", "ndex"] {
            assert!(text_matches(&item, query), "{query}");
        }
        assert!(!text_matches(&item, "gdp"));
        assert!(text_matches(&item, "   "));
    }

    #[test]
    fn both_queries_must_match() {
        let items = richer_items();
        let selections = SelectionSets::default();
        let filters = FilterState { global_query: "gsdp".to_string(), local_query: "kerala".to_string(), ..Default::default() };
        assert_eq!(ids(&filter_items(&items, &filters, &selections)), vec!["2"]);
    }

    #[test]
    fn facet_values_are_ored_and_missing_attribute_is_excluded() {
        let items = richer_items();
        let selections = SelectionSets::default();
        let mut filters = FilterState::default();
        filters.toggle_facet_value(FacetField::Unit, "INR Billion");
        filters.toggle_facet_value(FacetField::Unit, "Percent");
        assert_eq!(ids(&filter_items(&items, &filters, &selections)), vec!["1", "2", "3"]);

        filters.toggle_facet_value(FacetField::Category, "States");
        assert_eq!(ids(&filter_items(&items, &filters, &selections)), vec!["2"]);
    }

    #[test]
    fn bookmarks_only_uses_the_bookmark_set() {
        let items = richer_items();
        let mut selections = SelectionSets::default();
        selections.toggle_bookmarked(&ItemId::from("3"));
        selections.toggle_bookmarked(&ItemId::from("5"));
        selections.toggle_bookmarked(&ItemId::from("not-in-dataset"));
        selections.toggle_selected(&ItemId::from("1"));
        let filters = FilterState { bookmarks_only: true, ..Default::default() };
        assert_eq!(ids(&filter_items(&items, &filters, &selections)), vec!["3", "5"]);
    }

    #[test]
    fn survivors_satisfy_each_predicate_and_order_is_kept() {
        let items = richer_items();
        let mut selections = SelectionSets::default();
        selections.toggle_bookmarked(&ItemId::from("2"));
        selections.toggle_bookmarked(&ItemId::from("3"));
        let mut filters = FilterState { global_query: "a".to_string(), ..Default::default() };
        filters.toggle_facet_value(FacetField::Unit, "INR Billion");

        let survivors = filter_items(&items, &filters, &selections);
        let predicates = active_predicates(&filters);
        for item in &survivors {
            assert!(predicates.iter().all(|p| p.matches(item, &selections)));
        }
        let expected = items.iter().filter(|item| predicates.iter().all(|p| p.matches(item, &selections))).collect::<Vec<_>>();
        assert_eq!(survivors, expected);

        let positions = survivors.iter().map(|s| items.iter().position(|i| i.id == s.id).unwrap()).collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn cleared_filters_return_everything() {
        let items = richer_items();
        let mut filters = FilterState { local_query: "money".to_string(), ..Default::default() };
        filters.toggle_facet_value(FacetField::Frequency, "Daily");
        filters.clear_filters();
        assert_eq!(filter_items(&items, &filters, &SelectionSets::default()).len(), items.len());
        assert!(active_predicates(&filters).is_empty());
    }

    #[test]
    fn empty_results_messages() {
        let bookmarks = FilterState { bookmarks_only: true, ..Default::default() };
        let reason = EmptyResults::classify(&bookmarks);
        assert_eq!(reason, EmptyResults::NoBookmarks { facets_active: false });
        assert_eq!(reason.hint(), "Start bookmarking items to see them here");
        assert!(!reason.offers_clear_filters());

        let mut faceted = FilterState::with_global_query("zzz");
        faceted.toggle_facet_value(FacetField::Unit, "Percent");
        let reason = EmptyResults::classify(&faceted);
        assert_eq!(reason.headline(), "No results found");
        assert_eq!(reason.hint(), "Try adjusting your filters");
        assert!(reason.offers_clear_filters());

        let plain = EmptyResults::classify(&FilterState::default());
        assert_eq!(plain.headline(), "No items found");
        assert_eq!(plain.hint(), "Try adjusting your search terms");
        assert!(!plain.offers_clear_filters());
    }

    #[test]
    fn bookmarks_only_with_facets_offers_clear_filters() {
        let mut filters = FilterState { bookmarks_only: true, ..Default::default() };
        filters.toggle_facet_value(FacetField::Unit, "Percent");
        let reason = EmptyResults::classify(&filters);
        assert_eq!(reason, EmptyResults::NoBookmarks { facets_active: true });
        assert_eq!(reason.headline(), "No bookmarked items");
        assert!(reason.offers_clear_filters());
    }
}

//! Facet option lists derived from the active item list.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalogue_item::CatalogueItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FacetField {
    Frequency,
    Unit,
    Category,
}

impl FacetField {
    pub const ALL: [FacetField; 3] = [FacetField::Frequency, FacetField::Unit, FacetField::Category];

    pub fn display_name(&self) -> &'static str {
        match self {
            FacetField::Frequency => "Frequency",
            FacetField::Unit => "Unit",
            FacetField::Category => "Category",
        }
    }
}

/// Distinct, ascending values of each facet attribute.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FacetOptions {
    pub frequencies: Vec<String>,
    pub units: Vec<String>,
    pub categories: Vec<String>,
}

impl FacetOptions {
    pub fn values(&self, field: FacetField) -> &[String] {
        match field {
            FacetField::Frequency => &self.frequencies,
            FacetField::Unit => &self.units,
            FacetField::Category => &self.categories,
        }
    }
}

/// One checkbox row of a facet list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOptionState {
    pub value: String,
    pub is_selected: bool,
}

fn distinct_values<'a>(items: &'a [CatalogueItem], field: FacetField) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| item.facet_value(field))
        .filter(|value| !value.is_empty())
        .collect::<BTreeSet<&'a str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Recomputed in full from `items`; items without an attribute add nothing to that facet.
pub fn extract_facets(items: &[CatalogueItem]) -> FacetOptions {
    FacetOptions {
        frequencies: distinct_values(items, FacetField::Frequency),
        units: distinct_values(items, FacetField::Unit),
        categories: distinct_values(items, FacetField::Category),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn items() -> Vec<CatalogueItem> {
        vec![
            CatalogueItem::new("a", "GDP Growth").with_frequency("Quarterly").with_unit("Percent").with_category("National Accounts"),
            CatalogueItem::new("b", "CPI Index").with_frequency("Monthly").with_unit("Index").with_category("Prices"),
            CatalogueItem::new("c", "GDP Deflator").with_frequency("Quarterly").with_category("National Accounts"),
            CatalogueItem::new("d", "Untagged"),
            CatalogueItem::new("e", "Blank unit").with_unit(""),
        ]
    }

    #[test]
    fn distinct_sorted_non_empty_values() {
        let facets = extract_facets(&items());
        assert_eq!(facets.frequencies, vec!["Monthly", "Quarterly"]);
        assert_eq!(facets.units, vec!["Index", "Percent"]);
        assert_eq!(facets.categories, vec!["National Accounts", "Prices"]);
        assert_eq!(facets.values(FacetField::Unit), facets.units.as_slice());
    }

    #[test]
    fn deterministic_for_identical_input() {
        assert_eq!(extract_facets(&items()), extract_facets(&items()));
    }

    #[test]
    fn empty_input_has_no_options() {
        assert_eq!(extract_facets(&[]), FacetOptions::default());
    }
}

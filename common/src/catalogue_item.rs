//! Catalogue item models shared between the data feed, the query engine and the UI.

use serde::{Deserialize, Serialize};

use crate::facets::FacetField;

/// Opaque series identifier, unique within a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        ItemId(value)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single economic-data series descriptor, as delivered by the dataset feed.
///
/// Only `id`, `title` and the four facet/search attributes are interpreted by
/// the query engine. The remaining descriptors are carried along for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CatalogueItem {
    pub id: ItemId,
    pub title: String,
    #[serde(rename = "cat", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "subCat", skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    #[serde(rename = "freq", skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub db: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hierarchy: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subset: Option<String>,
    #[serde(rename = "sData", skip_serializing_if = "Option::is_none")]
    pub s_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl CatalogueItem {
    pub fn new(id: impl Into<ItemId>, title: impl Into<String>) -> Self {
        Self { id: id.into(), title: title.into(), ..Default::default() }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_sub_category(mut self, sub_category: impl Into<String>) -> Self {
        self.sub_category = Some(sub_category.into());
        self
    }

    pub fn with_frequency(mut self, frequency: impl Into<String>) -> Self {
        self.frequency = Some(frequency.into());
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// The attribute a facet filters on, if the item carries it.
    pub fn facet_value(&self, field: FacetField) -> Option<&str> {
        match field {
            FacetField::Frequency => self.frequency.as_deref(),
            FacetField::Unit => self.unit.as_deref(),
            FacetField::Category => self.category.as_deref(),
        }
    }

    /// Fields consulted by free-text search. Missing fields are skipped.
    pub fn text_fields(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.title.as_str()),
            self.category.as_deref(),
            self.sub_category.as_deref(),
            self.frequency.as_deref(),
            self.unit.as_deref(),
        ]
        .into_iter()
        .flatten()
    }

    /// "Category / Sub-category" line shown under the title.
    pub fn category_label(&self) -> Option<String> {
        match (self.category.as_deref(), self.sub_category.as_deref()) {
            (None, None) => None,
            (Some(cat), None) => Some(cat.to_string()),
            (None, Some(sub)) => Some(format!("/ {sub}")),
            (Some(cat), Some(sub)) => Some(format!("{cat} / {sub}")),
        }
    }
}

//! Named datasets and their category taxonomy.

use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalogue_item::CatalogueItem;
use crate::category_tree::CategoryPath;

/// The fixed set of catalogues the dataset provider supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum DatasetKey {
    #[default]
    Rbi,
    Imf,
}

impl DatasetKey {
    pub const ALL: [DatasetKey; 2] = [DatasetKey::Rbi, DatasetKey::Imf];

    pub fn display_name(&self) -> &'static str {
        match self {
            DatasetKey::Rbi => "India & States",
            DatasetKey::Imf => "IMF",
        }
    }

    /// File name of this catalogue inside the data directory.
    pub fn source_file_name(&self) -> &'static str {
        match self {
            DatasetKey::Rbi => "response1.json",
            DatasetKey::Imf => "response2.json",
        }
    }
}

impl std::fmt::Display for DatasetKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetKey::Rbi => write!(f, "rbi"),
            DatasetKey::Imf => write!(f, "imf"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnknownDatasetKey(pub String);

impl std::fmt::Display for UnknownDatasetKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown dataset: {:?}", self.0)
    }
}

impl std::error::Error for UnknownDatasetKey {}

impl FromStr for DatasetKey {
    type Err = UnknownDatasetKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rbi" => Ok(DatasetKey::Rbi),
            "imf" => Ok(DatasetKey::Imf),
            _ => Err(UnknownDatasetKey(s.to_string())),
        }
    }
}

/// Category label -> child taxonomy. Leaves map to an empty tree.
///
/// Key order is the order of the feed, and is the display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct CategoryTree(pub IndexMap<String, CategoryTree>);

impl CategoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder used mostly by tests and fixtures.
    pub fn with_child(mut self, label: impl Into<String>, child: CategoryTree) -> Self {
        self.0.insert(label.into(), child);
        self
    }

    pub fn children(&self) -> impl Iterator<Item = (&String, &CategoryTree)> {
        self.0.iter()
    }

    pub fn get(&self, label: &str) -> Option<&CategoryTree> {
        self.0.get(label)
    }

    pub fn is_leaf(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Walks `path` from this node. An empty path is this node.
    pub fn node_at(&self, path: &CategoryPath) -> Option<&CategoryTree> {
        let mut node = self;
        for label in path.labels() {
            node = node.get(label)?;
        }
        Some(node)
    }
}

/// One catalogue as supplied by the dataset provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Dataset {
    #[serde(rename = "frequent")]
    pub items: Vec<CatalogueItem>,
    #[serde(rename = "categories")]
    pub taxonomy: CategoryTree,
}

impl Dataset {
    pub fn new(items: Vec<CatalogueItem>, taxonomy: CategoryTree) -> Self {
        Self { items, taxonomy }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn dataset_key_round_trips_through_display() {
        for key in DatasetKey::ALL {
            assert_eq!(key.to_string().parse::<DatasetKey>(), Ok(key));
        }
        assert_eq!(" IMF ".parse::<DatasetKey>(), Ok(DatasetKey::Imf));
        assert_eq!("ecb".parse::<DatasetKey>(), Err(UnknownDatasetKey("ecb".to_string())));
    }

    #[test]
    fn taxonomy_keeps_feed_order() {
        let raw = r#"{"Zeta": {}, "Alpha": {"Beta": {}}, "Mid": {}}"#;
        let tree: CategoryTree = serde_json::from_str(raw).unwrap();
        let labels = tree.children().map(|(label, _)| label.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, vec!["Zeta", "Alpha", "Mid"]);
        assert!(tree.get("Zeta").unwrap().is_leaf());
        assert!(!tree.get("Alpha").unwrap().is_leaf());
    }

    #[test]
    fn node_at_walks_the_path() {
        let tree = CategoryTree::new()
            .with_child("India", CategoryTree::new().with_child("States", CategoryTree::new().with_child("Kerala", CategoryTree::new())));
        let path = CategoryPath::from_labels(["India", "States"]);
        assert_eq!(tree.node_at(&path).map(|n| n.len()), Some(1));
        assert!(tree.node_at(&CategoryPath::from_labels(["India", "Nope"])).is_none());
        assert_eq!(tree.node_at(&CategoryPath::root()), Some(&tree));
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let dataset: Dataset = serde_json::from_str("{}").unwrap();
        assert_eq!(dataset, Dataset::empty());
    }
}

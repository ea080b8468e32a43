//! Holds the provider's catalogues and which one is active.

use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

use tracing::debug;

use crate::dataset::{Dataset, DatasetKey};

static EMPTY_DATASET: LazyLock<Arc<Dataset>> = LazyLock::new(|| Arc::new(Dataset::empty()));

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogueStore {
    catalogues: BTreeMap<DatasetKey, Arc<Dataset>>,
    active: DatasetKey,
}

impl Default for CatalogueStore {
    fn default() -> Self {
        Self::new(std::iter::empty::<(DatasetKey, Dataset)>())
    }
}

impl CatalogueStore {
    pub fn new(catalogues: impl IntoIterator<Item = (DatasetKey, Dataset)>) -> Self {
        Self {
            catalogues: catalogues.into_iter().map(|(key, dataset)| (key, Arc::new(dataset))).collect(),
            active: DatasetKey::default(),
        }
    }

    pub fn active_key(&self) -> DatasetKey {
        self.active
    }

    /// The active dataset. A key the provider never supplied reads as empty.
    pub fn active_dataset(&self) -> Arc<Dataset> {
        self.dataset(self.active)
    }

    pub fn dataset(&self, key: DatasetKey) -> Arc<Dataset> {
        self.catalogues.get(&key).cloned().unwrap_or_else(|| EMPTY_DATASET.clone())
    }

    pub fn has_dataset(&self, key: DatasetKey) -> bool {
        self.catalogues.contains_key(&key)
    }

    /// Returns false when `key` is already active.
    pub fn switch_dataset(&mut self, key: DatasetKey) -> bool {
        if self.active == key {
            return false;
        }
        debug!("switching catalogue dataset: {} -> {}", self.active, key);
        self.active = key;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue_item::CatalogueItem;

    #[test]
    fn switching_replaces_the_whole_dataset() {
        let rbi = Dataset::new(vec![CatalogueItem::new("a", "Repo Rate")], Default::default());
        let imf = Dataset::new(vec![CatalogueItem::new("x", "World GDP"), CatalogueItem::new("y", "World CPI")], Default::default());
        let mut store = CatalogueStore::new([(DatasetKey::Rbi, rbi), (DatasetKey::Imf, imf)]);

        assert_eq!(store.active_key(), DatasetKey::Rbi);
        let before = store.active_dataset();
        assert!(store.switch_dataset(DatasetKey::Imf));
        assert!(!store.switch_dataset(DatasetKey::Imf));
        assert_eq!(store.active_dataset().items.len(), 2);
        // readers holding the old dataset keep seeing it whole
        assert_eq!(before.items.len(), 1);
    }

    #[test]
    fn missing_dataset_reads_as_empty() {
        let mut store = CatalogueStore::new([(DatasetKey::Rbi, Dataset::empty())]);
        store.switch_dataset(DatasetKey::Imf);
        assert!(!store.has_dataset(DatasetKey::Imf));
        assert!(store.active_dataset().items.is_empty());
        assert!(store.active_dataset().taxonomy.is_empty());
    }
}

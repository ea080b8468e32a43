//! Reads dataset JSON files produced by the catalogue export.

use std::path::Path;

use anyhow::Context;
use common::dataset::{Dataset, DatasetKey};

pub fn parse_dataset(key: DatasetKey, bytes: &[u8]) -> anyhow::Result<Dataset> {
    serde_json::from_slice::<Dataset>(bytes).with_context(|| format!("Failed to parse dataset {key} ({})", key.source_file_name()))
}

pub async fn load_dataset(data_dir: &Path, key: DatasetKey) -> anyhow::Result<Dataset> {
    let path = data_dir.join(key.source_file_name());
    let bytes = tokio::fs::read(&path).await.with_context(|| format!("Failed to read dataset file {}", path.display()))?;
    let dataset = parse_dataset(key, &bytes)?;
    tracing::info!(
        "Loaded dataset {}: {} items, {} top-level categories",
        key,
        dataset.items.len(),
        dataset.taxonomy.len()
    );
    Ok(dataset)
}

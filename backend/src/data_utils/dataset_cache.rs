//! Process-wide cache of the loaded catalogues.
//!
//! The catalogues are read once and never change while the server runs. A
//! failed load leaves the cache empty so the next request retries.

use common::dataset::{Dataset, DatasetKey};
use tokio::sync::OnceCell;

use crate::config::CatalogueConfig;
use crate::data_utils::dataset_loader::load_dataset;

static CATALOGUES: OnceCell<Vec<(DatasetKey, Dataset)>> = OnceCell::const_new();

pub async fn get_catalogues() -> anyhow::Result<&'static [(DatasetKey, Dataset)]> {
    let catalogues = CATALOGUES
        .get_or_try_init(|| async {
            let config = CatalogueConfig::from_env();
            tracing::info!("Loading catalogues from {}", config.data_dir.display());
            load_all(&config).await.inspect_err(|e| {
                tracing::error!("get_catalogues: failed to load catalogues: {:#?}", e);
            })
        })
        .await?;
    Ok(catalogues.as_slice())
}

pub async fn load_all(config: &CatalogueConfig) -> anyhow::Result<Vec<(DatasetKey, Dataset)>> {
    let mut catalogues = Vec::with_capacity(DatasetKey::ALL.len());
    for key in DatasetKey::ALL {
        catalogues.push((key, load_dataset(&config.data_dir, key).await?));
    }
    Ok(catalogues)
}

//! Hands the loaded catalogues to the UI.

use common::dataset::{Dataset, DatasetKey};

use crate::data_utils::dataset_cache::get_catalogues;

pub async fn load_catalogues() -> anyhow::Result<Vec<(DatasetKey, Dataset)>> {
    let catalogues = get_catalogues().await?;
    Ok(catalogues.to_vec())
}


//! Dataset provider: file loading and caching.

pub mod dataset_cache;
pub mod dataset_loader;

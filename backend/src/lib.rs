//! Server side of the economic catalogue: dataset provider and identity adapter.

pub mod api;
pub mod config;
pub mod data_utils;

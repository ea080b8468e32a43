//! Catalogue query engine shared between frontend and backend.
//!
//! Everything here is pure and synchronous: the dataset provider and the
//! identity provider live in `backend`, rendering lives in `frontend`.

extern crate serde;


pub mod auth;
pub mod catalogue_item;
pub mod catalogue_store;
pub mod category_tree;
pub mod dataset;
pub mod facets;
pub mod filter_state;
pub mod pagination;
pub mod query_engine;
pub mod selection;
pub mod session;

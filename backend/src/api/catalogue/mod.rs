//! Catalogue API handlers and module exports.

mod load_catalogues;
pub use load_catalogues::load_catalogues;

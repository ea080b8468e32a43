//! Shared state for the components of the catalogue page.

use common::session::CatalogueSession;
use dioxus::prelude::*;

#[derive(Clone, Copy)]
pub struct CatalogueContext {
    pub session: Signal<CatalogueSession>,
    /// Whether the facet filter panel is expanded.
    pub show_filters: Signal<bool>,
}

//! One user's catalogue session: what the presentation layer reads and mutates.
//!
//! Only inputs are stored here. Facets, the filtered list and pagination are
//! recomputed from those inputs on every read.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::catalogue_item::{CatalogueItem, ItemId};
use crate::catalogue_store::CatalogueStore;
use crate::category_tree::{CategoryPath, CategoryRow, CategoryTreeState, visible_rows};
use crate::dataset::{Dataset, DatasetKey};
use crate::facets::{FacetField, FacetOptionState, FacetOptions, extract_facets};
use crate::filter_state::FilterState;
use crate::pagination::{PAGE_SIZE, PageStripEntry, Pagination};
use crate::query_engine::{EmptyResults, filter_items};
use crate::selection::{SelectionRole, SelectionSets};

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogueSession {
    store: CatalogueStore,
    filters: FilterState,
    selections: SelectionSets,
    requested_page: u64,
    tree_states: HashMap<DatasetKey, CategoryTreeState>,
}

impl CatalogueSession {
    pub fn new(store: CatalogueStore) -> Self {
        Self::with_filters(store, FilterState::default())
    }

    pub fn with_filters(store: CatalogueStore, filters: FilterState) -> Self {
        Self { store, filters, selections: SelectionSets::default(), requested_page: 1, tree_states: HashMap::new() }
    }

    // ---- dataset ----

    pub fn active_dataset_key(&self) -> DatasetKey {
        self.store.active_key()
    }

    pub fn active_dataset(&self) -> Arc<Dataset> {
        self.store.active_dataset()
    }

    /// Selections survive the switch; the page does not.
    pub fn switch_dataset(&mut self, key: DatasetKey) {
        if self.store.switch_dataset(key) {
            self.reset_page();
        }
    }

    // ---- filters ----

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn set_global_query(&mut self, query: impl Into<String>) {
        self.update_filters(|filters| filters.global_query = query.into());
    }

    pub fn set_local_query(&mut self, query: impl Into<String>) {
        self.update_filters(|filters| filters.local_query = query.into());
    }

    pub fn set_bookmarks_only(&mut self, bookmarks_only: bool) {
        self.update_filters(|filters| filters.bookmarks_only = bookmarks_only);
    }

    pub fn toggle_bookmarks_only(&mut self) {
        self.update_filters(|filters| filters.bookmarks_only = !filters.bookmarks_only);
    }

    pub fn toggle_facet_value(&mut self, field: FacetField, value: &str) {
        self.update_filters(|filters| {
            filters.toggle_facet_value(field, value);
        });
    }

    pub fn clear_filters(&mut self) {
        self.update_filters(FilterState::clear_filters);
    }

    pub fn replace_filters(&mut self, filters: FilterState) {
        self.update_filters(|current| *current = filters);
    }

    fn update_filters(&mut self, update: impl FnOnce(&mut FilterState)) {
        let before = self.filters.clone();
        update(&mut self.filters);
        if self.filters != before {
            self.reset_page();
        }
    }

    // ---- selections ----

    pub fn selections(&self) -> &SelectionSets {
        &self.selections
    }

    /// Bookmark changes can shrink a bookmarks-only list, so the page is
    /// clamped afterwards rather than reset.
    pub fn toggle(&mut self, role: SelectionRole, id: &ItemId) -> bool {
        let now_member = self.selections.toggle(role, id);
        self.requested_page = self.current_page();
        now_member
    }

    pub fn toggle_selected(&mut self, id: &ItemId) -> bool {
        self.toggle(SelectionRole::Selected, id)
    }

    pub fn toggle_bookmarked(&mut self, id: &ItemId) -> bool {
        self.toggle(SelectionRole::Bookmarked, id)
    }

    pub fn toggle_cart(&mut self, id: &ItemId) -> bool {
        self.toggle(SelectionRole::Cart, id)
    }

    pub fn toggle_pinned(&mut self, id: &ItemId) -> bool {
        self.toggle(SelectionRole::Pinned, id)
    }

    pub fn is_member(&self, role: SelectionRole, id: &ItemId) -> bool {
        self.selections.contains(role, id)
    }

    pub fn selection_count(&self, role: SelectionRole) -> usize {
        self.selections.count(role)
    }

    /// The graph view needs at least one selected series.
    pub fn can_view_graph(&self) -> bool {
        self.selections.count(SelectionRole::Selected) > 0
    }

    // ---- derived results ----

    pub fn facet_options(&self) -> FacetOptions {
        extract_facets(&self.store.active_dataset().items)
    }

    pub fn facet_option_states(&self, field: FacetField) -> Vec<FacetOptionState> {
        self.facet_options()
            .values(field)
            .iter()
            .map(|value| FacetOptionState { value: value.clone(), is_selected: self.filters.is_value_selected(field, value) })
            .collect()
    }

    pub fn filtered_items(&self) -> Vec<CatalogueItem> {
        let dataset = self.store.active_dataset();
        filter_items(&dataset.items, &self.filters, &self.selections).into_iter().cloned().collect()
    }

    pub fn filtered_count(&self) -> u64 {
        let dataset = self.store.active_dataset();
        filter_items(&dataset.items, &self.filters, &self.selections).len() as u64
    }

    pub fn active_filter_count(&self) -> usize {
        self.filters.active_filter_count()
    }

    pub fn is_filtered(&self) -> bool {
        self.filters.is_filtered()
    }

    /// `None` while there is something to show.
    pub fn empty_results(&self) -> Option<EmptyResults> {
        (self.filtered_count() == 0).then(|| EmptyResults::classify(&self.filters))
    }

    // ---- pagination ----

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.filtered_count(), PAGE_SIZE, self.requested_page)
    }

    pub fn current_page(&self) -> u64 {
        self.pagination().current_page()
    }

    pub fn total_pages(&self) -> u64 {
        self.pagination().total_pages()
    }

    pub fn visible_items(&self) -> Vec<CatalogueItem> {
        let dataset = self.store.active_dataset();
        let filtered = filter_items(&dataset.items, &self.filters, &self.selections);
        let pagination = Pagination::new(filtered.len() as u64, PAGE_SIZE, self.requested_page);
        filtered[pagination.page_range()].iter().map(|item| (*item).clone()).collect()
    }

    pub fn page_strip(&self) -> Vec<PageStripEntry> {
        self.pagination().page_strip()
    }

    /// Out-of-range pages are rejected without changing anything.
    pub fn go_to_page(&mut self, page: u64) -> bool {
        if !self.pagination().accepts(page) {
            debug!("rejected navigation to page {} of {}", page, self.total_pages());
            return false;
        }
        self.requested_page = page;
        true
    }

    pub fn next_page(&mut self) -> bool {
        let pagination = self.pagination();
        pagination.can_go_next() && self.go_to_page(pagination.current_page() + 1)
    }

    pub fn previous_page(&mut self) -> bool {
        let pagination = self.pagination();
        pagination.can_go_previous() && self.go_to_page(pagination.current_page() - 1)
    }

    fn reset_page(&mut self) {
        self.requested_page = 1;
    }

    // ---- category tree ----

    pub fn category_rows(&self) -> Vec<CategoryRow> {
        let key = self.store.active_key();
        let dataset = self.store.active_dataset();
        match self.tree_states.get(&key) {
            Some(state) => visible_rows(&dataset.taxonomy, state),
            None => visible_rows(&dataset.taxonomy, &CategoryTreeState::default()),
        }
    }

    pub fn is_category_open(&self, path: &CategoryPath) -> bool {
        self.tree_states.get(&self.store.active_key()).is_some_and(|state| state.is_open(path))
    }

    pub fn toggle_category(&mut self, path: &CategoryPath) -> bool {
        let key = self.store.active_key();
        let dataset = self.store.active_dataset();
        self.tree_states.entry(key).or_default().toggle(&dataset.taxonomy, path)
    }
}

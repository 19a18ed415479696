// Stocklist - app/state.rs
//
// Application state management. Holds the catalog store, the current
// filter spec, and the derived view. Owned by the interactive session;
// one instance per session, explicitly constructed — no ambient globals.

use crate::core::model::{FilterSpec, Product, SortOrder, Statistics};
use crate::core::store::CatalogStore;
use crate::core::{query, stats, validate};
use crate::util::error::ValidationError;

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// The authoritative catalog.
    store: CatalogStore,

    /// Current filter configuration.
    filter_spec: FilterSpec,

    /// Indices of products in the current view (into `store.list()`),
    /// in view order. Recomputed after every mutation or filter change.
    view: Vec<usize>,

    /// Minimum name length enforced on add (config-overridable).
    min_name_len: usize,

    /// Status message for the session's status line.
    pub status_message: String,
}

impl AppState {
    /// Create initial state with an empty catalog.
    pub fn new(min_name_len: usize) -> Self {
        Self {
            store: CatalogStore::new(),
            filter_spec: FilterSpec::default(),
            view: Vec::new(),
            min_name_len,
            status_message: "Ready. Type 'help' for commands.".to_string(),
        }
    }

    // -------------------------------------------------------------------
    // Catalog mutations
    // -------------------------------------------------------------------

    /// Validate and add a product, then recompute the view.
    ///
    /// Returns the new product's ID. On failure every violation is
    /// reported together so the user can fix them in one pass.
    pub fn add_product(
        &mut self,
        name: &str,
        price: f64,
        category: &str,
    ) -> Result<u64, ValidationError> {
        validate::validate_product(name, price, category, self.min_name_len)?;
        let product = self.store.add(name, price, category)?;
        let id = product.id;
        let name = product.name.clone();

        self.apply_filters();
        self.status_message = format!("Added '{name}' (id {id}).");
        tracing::info!(id, "Product added");
        Ok(id)
    }

    /// Remove a product by ID, then recompute the view.
    ///
    /// Returns the removed product, or `None` if the ID is unknown —
    /// a benign no-op, not an error.
    pub fn remove_product(&mut self, id: u64) -> Option<Product> {
        match self.store.remove(id) {
            Some(removed) => {
                self.apply_filters();
                self.status_message = format!("Removed '{}' (id {id}).", removed.name);
                tracing::info!(id, "Product removed");
                Some(removed)
            }
            None => {
                self.status_message = format!("No product with id {id}; nothing removed.");
                tracing::debug!(id, "Remove requested for unknown id");
                None
            }
        }
    }

    // -------------------------------------------------------------------
    // Filter spec updates
    // -------------------------------------------------------------------

    /// Set the category filter. `None` = all categories.
    pub fn set_category(&mut self, category: Option<String>) {
        self.filter_spec.category = category;
        self.apply_filters();
    }

    /// Set the search text (case-insensitive substring over names).
    pub fn set_search(&mut self, text: &str) {
        self.filter_spec.search_text = text.to_string();
        self.apply_filters();
    }

    /// Set the price sort order of the view.
    pub fn set_sort(&mut self, order: SortOrder) {
        self.filter_spec.sort_order = order;
        self.apply_filters();
    }

    /// Reset the filter spec to its defaults (identity view).
    pub fn clear_filters(&mut self) {
        self.filter_spec = FilterSpec::default();
        self.apply_filters();
        self.status_message = "Filters cleared.".to_string();
    }

    /// Recompute the view from the current catalog and filter spec.
    pub fn apply_filters(&mut self) {
        self.view = query::apply_filter(self.store.list(), &self.filter_spec);
    }

    // -------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------

    /// The full catalog in insertion order.
    pub fn catalog(&self) -> &[Product] {
        self.store.list()
    }

    /// View indices into `catalog()`, in view order.
    pub fn view_indices(&self) -> &[usize] {
        &self.view
    }

    /// Resolved view: the filtered, ordered products for display/export.
    pub fn view_products(&self) -> Vec<&Product> {
        let products = self.store.list();
        self.view.iter().map(|&idx| &products[idx]).collect()
    }

    /// The active filter spec.
    pub fn filter_spec(&self) -> &FilterSpec {
        &self.filter_spec
    }

    /// Aggregate statistics over the FULL catalog, not the filtered view.
    /// `None` when the catalog is empty.
    pub fn statistics(&self) -> Option<Statistics<'_>> {
        stats::compute(self.store.list())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::constants::MIN_NAME_LEN;

    fn state_with_samples() -> AppState {
        let mut state = AppState::new(MIN_NAME_LEN);
        state.add_product("Widget", 9.99, "tools").unwrap();
        state.add_product("Gadget", 3.50, "tools").unwrap();
        state.add_product("Gizmo", 3.50, "electronics").unwrap();
        state
    }

    #[test]
    fn test_add_recomputes_view() {
        let mut state = AppState::new(MIN_NAME_LEN);
        state.set_category(Some("tools".to_string()));
        assert!(state.view_products().is_empty());

        state.add_product("Widget", 9.99, "tools").unwrap();
        state.add_product("Gizmo", 3.50, "electronics").unwrap();

        let names: Vec<_> = state.view_products().iter().map(|p| p.name.clone()).collect();
        assert_eq!(names, vec!["Widget"]);
    }

    #[test]
    fn test_add_rejects_invalid_input_with_all_violations() {
        let mut state = AppState::new(MIN_NAME_LEN);
        let err = state.add_product("ab", 0.0, "").unwrap_err();
        assert_eq!(err.violations.len(), 3);
        assert!(state.catalog().is_empty());
    }

    #[test]
    fn test_remove_updates_view_and_status() {
        let mut state = state_with_samples();
        let removed = state.remove_product(2).unwrap();
        assert_eq!(removed.name, "Gadget");
        assert_eq!(state.view_products().len(), 2);
        assert!(state.status_message.contains("Removed"));
    }

    #[test]
    fn test_remove_unknown_id_sets_benign_status() {
        let mut state = state_with_samples();
        assert!(state.remove_product(99).is_none());
        assert_eq!(state.catalog().len(), 3);
        assert!(state.status_message.contains("nothing removed"));
    }

    #[test]
    fn test_filter_and_sort_through_state() {
        let mut state = state_with_samples();
        state.set_category(Some("tools".to_string()));
        state.set_sort(SortOrder::Ascending);

        let view = state.view_products();
        let names: Vec<_> = view.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Gadget", "Widget"]);
    }

    #[test]
    fn test_clear_filters_restores_identity_view() {
        let mut state = state_with_samples();
        state.set_search("wid");
        assert_eq!(state.view_products().len(), 1);

        state.clear_filters();
        assert!(state.filter_spec().is_identity());
        assert_eq!(state.view_indices(), &[0, 1, 2]);
    }

    #[test]
    fn test_statistics_cover_full_catalog_despite_filter() {
        let mut state = state_with_samples();
        state.set_category(Some("electronics".to_string()));
        assert_eq!(state.view_products().len(), 1);

        // Statistics ignore the active filter
        let stats = state.statistics().unwrap();
        assert_eq!(stats.count, 3);
        assert_eq!(stats.most_expensive.name, "Widget");
        assert_eq!(stats.cheapest.name, "Gadget");
    }

    #[test]
    fn test_statistics_none_on_empty_catalog() {
        let state = AppState::new(MIN_NAME_LEN);
        assert!(state.statistics().is_none());
    }

    #[test]
    fn test_custom_min_name_len_enforced() {
        let mut state = AppState::new(5);
        let err = state.add_product("Tiny", 1.0, "tools").unwrap_err();
        assert!(err.has_field("name"));
        assert!(state.add_product("Tinys", 1.0, "tools").is_ok());
    }
}

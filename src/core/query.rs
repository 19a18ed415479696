// Stocklist - core/query.rs
//
// Query engine for the catalog view: multi-predicate filtering combined
// with comparator-based price sorting. All active predicates are
// AND-combined. Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{FilterSpec, Product, SortOrder};

/// Apply a filter spec to a slice of products, returning indices of the
/// matching products in view order.
///
/// Returns a Vec of indices into the original products slice. This avoids
/// copying products and keeps the catalog itself untouched: the result is
/// a derived view, never the catalog. Deterministic — identical input and
/// spec always yield an identical index sequence.
///
/// Ordering: with `SortOrder::None` the filtered (= insertion) order is
/// preserved. Ascending/descending sorts are stable, so products with
/// equal prices retain their insertion order in both directions.
pub fn apply_filter(products: &[Product], spec: &FilterSpec) -> Vec<usize> {
    let mut indices: Vec<usize> = if spec.category.is_none() && spec.search_text.is_empty() {
        (0..products.len()).collect()
    } else {
        let search_lower = spec.search_text.to_lowercase();
        products
            .iter()
            .enumerate()
            .filter(|(_, p)| matches_all(p, spec, &search_lower))
            .map(|(idx, _)| idx)
            .collect()
    };

    match spec.sort_order {
        SortOrder::None => {}
        SortOrder::Ascending => {
            indices.sort_by(|&a, &b| products[a].price.total_cmp(&products[b].price));
        }
        SortOrder::Descending => {
            indices.sort_by(|&a, &b| products[b].price.total_cmp(&products[a].price));
        }
    }

    indices
}

/// Check if a single product matches all active filters.
fn matches_all(product: &Product, spec: &FilterSpec, search_lower: &str) -> bool {
    // Category filter (exact match; None = all categories)
    if let Some(ref category) = spec.category {
        if product.category != *category {
            return false;
        }
    }

    // Text search (case-insensitive substring over the name)
    if !search_lower.is_empty() && !product.name.to_lowercase().contains(search_lower) {
        return false;
    }

    true
}

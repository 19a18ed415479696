// Stocklist - core/store.rs
//
// The catalog store: authoritative ordered collection of products and
// the monotonic ID sequence. Core layer: pure logic, no I/O.
//
// NOT thread-safe: the store assumes exactly one logical actor. Callers
// sharing a store across threads must provide external synchronisation
// (e.g. wrap it in a Mutex).

use crate::core::model::Product;
use crate::util::constants::{FIRST_PRODUCT_ID, MAX_CATALOG_ENTRIES};
use crate::util::error::{ValidationError, Violation};
use chrono::Utc;

/// Owns the product collection and allocates IDs.
///
/// IDs are strictly increasing integers starting at 1 with no gaps across
/// the lifetime of the store, regardless of intervening removals — removed
/// IDs are never reused. Insertion order is preserved; products are never
/// mutated in place.
#[derive(Debug)]
pub struct CatalogStore {
    products: Vec<Product>,
    next_id: u64,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore {
    /// Create an empty store. The first `add` returns ID 1.
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            next_id: FIRST_PRODUCT_ID,
        }
    }

    /// Append a new product and return a reference to it.
    ///
    /// Full input validation is the caller's responsibility (see
    /// `core::validate`); this guard only rejects data that would corrupt
    /// the catalog's invariants: non-positive or non-finite price, empty
    /// trimmed name or category, and a catalog at its size bound.
    ///
    /// The name and category are stored trimmed. `registered_at` is
    /// stamped with the current UTC time.
    pub fn add(
        &mut self,
        name: &str,
        price: f64,
        category: &str,
    ) -> std::result::Result<&Product, ValidationError> {
        let name = name.trim();
        let category = category.trim();

        let mut violations = Vec::new();
        if name.is_empty() {
            violations.push(Violation {
                field: "name",
                reason: "must not be empty".to_string(),
            });
        }
        if !(price > 0.0 && price.is_finite()) {
            violations.push(Violation {
                field: "price",
                reason: format!("must be a positive number, got {price}"),
            });
        }
        if category.is_empty() {
            violations.push(Violation {
                field: "category",
                reason: "must not be empty".to_string(),
            });
        }
        if self.products.len() >= MAX_CATALOG_ENTRIES {
            violations.push(Violation {
                field: "catalog",
                reason: format!("catalog is full ({MAX_CATALOG_ENTRIES} products)"),
            });
        }
        if !violations.is_empty() {
            return Err(ValidationError::new(violations));
        }

        let product = Product {
            id: self.next_id,
            name: name.to_string(),
            price,
            category: category.to_string(),
            registered_at: Utc::now(),
        };
        self.next_id += 1;
        self.products.push(product);

        let created = &self.products[self.products.len() - 1];
        tracing::debug!(id = created.id, "Product added to catalog");
        Ok(created)
    }

    /// Remove the product with the given ID, preserving the relative
    /// order of the remainder.
    ///
    /// Returns the removed product for confirmation messaging, or `None`
    /// if no such ID exists. An unknown ID is a benign no-op, not an
    /// error — removing an already-removed product is safely ignored.
    pub fn remove(&mut self, id: u64) -> Option<Product> {
        let idx = self.products.iter().position(|p| p.id == id)?;
        let removed = self.products.remove(idx);
        tracing::debug!(id, "Product removed from catalog");
        Some(removed)
    }

    /// The full catalog in insertion order. Read-only view.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Number of products currently in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True if the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

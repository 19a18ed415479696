// Stocklist - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use chrono::{DateTime, Utc};
use serde::Serialize;

// =============================================================================
// Product
// =============================================================================

/// A single catalog entry.
///
/// Products are immutable once created: the only lifecycle operations are
/// append (via `CatalogStore::add`) and remove-by-id. All fields are public
/// for read access; the store is the sole constructor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    /// Unique ID, strictly increasing from 1 within the session.
    /// Never reused after removal, never mutated.
    pub id: u64,

    /// Display name. Non-empty, at least `MIN_NAME_LEN` characters
    /// after trimming (enforced by `core::validate` and the store guard).
    pub name: String,

    /// Unit price. Strictly positive.
    pub price: f64,

    /// Category label. The core treats this as an opaque non-empty string;
    /// membership in the configured category set is the presentation
    /// layer's concern.
    pub category: String,

    /// Creation timestamp in UTC. Display-only: never used in any
    /// ordering or filtering decision.
    pub registered_at: DateTime<Utc>,
}

// =============================================================================
// Filter specification
// =============================================================================

/// Price sort direction for the derived view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Preserve filtered (insertion) order.
    #[default]
    None,

    /// Price non-decreasing, stable on ties.
    Ascending,

    /// Price non-increasing, stable on ties.
    Descending,
}

/// Complete filter state for the catalog view. All active fields are
/// AND-combined when applied.
///
/// Transient value object: rebuilt from presentation state on every
/// change, never persisted.
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    /// Category to include. `None` = all categories.
    pub category: Option<String>,

    /// Substring text search over product names (case-insensitive).
    /// Empty = no filter.
    pub search_text: String,

    /// Price ordering of the view.
    pub sort_order: SortOrder,
}

impl FilterSpec {
    /// Returns true if no filters or ordering are active, i.e. applying
    /// this spec returns the catalog in exact insertion order.
    pub fn is_identity(&self) -> bool {
        self.category.is_none()
            && self.search_text.is_empty()
            && self.sort_order == SortOrder::None
    }
}

// =============================================================================
// Statistics
// =============================================================================

/// Aggregate statistics over the full (unfiltered) catalog.
///
/// Borrowed: `cheapest` and `most_expensive` point into the catalog slice
/// the statistics were computed from. An empty catalog yields no
/// `Statistics` at all (`stats::compute` returns `None`), never a
/// zero-valued one.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics<'a> {
    /// Total number of products.
    pub count: usize,

    /// Mean price across all products.
    pub average_price: f64,

    /// Product with the minimum price. On ties, the one appearing
    /// earliest in insertion order.
    pub cheapest: &'a Product,

    /// Product with the maximum price. On ties, the one appearing
    /// earliest in insertion order.
    pub most_expensive: &'a Product,
}

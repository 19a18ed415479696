// Stocklist - core/stats.rs
//
// Aggregate statistics over the full catalog: count, average price, and
// price extrema, computed in a single pass. Core layer: pure logic.
//
// Statistics always cover the complete unfiltered catalog, even while a
// filter narrows the visible view.

use crate::core::model::{Product, Statistics};

/// Compute aggregate statistics over a product slice.
///
/// Returns `None` for an empty slice — the "no data" condition is
/// distinct from any zero-valued result and must be handled by the
/// caller, never silently rendered as zeros.
///
/// Tie-break: strict `<` / `>` comparisons, so when several products
/// share the extremal price the first one in iteration (insertion)
/// order is retained.
pub fn compute(products: &[Product]) -> Option<Statistics<'_>> {
    let first = products.first()?;

    let mut sum = 0.0;
    let mut cheapest = first;
    let mut most_expensive = first;

    for product in products {
        sum += product.price;
        if product.price < cheapest.price {
            cheapest = product;
        }
        if product.price > most_expensive.price {
            most_expensive = product;
        }
    }

    Some(Statistics {
        count: products.len(),
        average_price: sum / products.len() as f64,
        cheapest,
        most_expensive,
    })
}

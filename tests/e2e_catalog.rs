// Stocklist - tests/e2e_catalog.rs
//
// End-to-end tests for the catalog session: store, query engine,
// statistics, and export exercised together through the public API —
// no mocks, no stubs. This follows the exact lifecycle a presentation
// layer drives: mutate, refilter, recompute, export.

use stocklist::app::state::AppState;
use stocklist::core::export;
use stocklist::core::model::SortOrder;
use stocklist::util::constants::MIN_NAME_LEN;

/// Build the three-product catalog used across these tests.
fn session_with_catalog() -> AppState {
    let mut state = AppState::new(MIN_NAME_LEN);
    state.add_product("Widget", 9.99, "tools").unwrap();
    state.add_product("Gadget", 3.50, "tools").unwrap();
    state.add_product("Gizmo", 3.50, "electronics").unwrap();
    state
}

// =============================================================================
// Full scenario
// =============================================================================

/// The canonical end-to-end pass: add three products, filter to tools
/// ascending, then compute statistics over the full catalog.
#[test]
fn e2e_filter_sort_and_statistics() {
    let mut state = session_with_catalog();

    state.set_category(Some("tools".to_string()));
    state.set_sort(SortOrder::Ascending);

    let view = state.view_products();
    let names: Vec<_> = view.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Gadget", "Widget"]);
    assert_eq!(view[0].price, 3.50);
    assert_eq!(view[1].price, 9.99);

    // Statistics run over the full catalog, not the two-product view
    let stats = state.statistics().unwrap();
    assert_eq!(stats.count, 3);
    let expected_avg = (9.99 + 3.50 + 3.50) / 3.0;
    assert!((stats.average_price - expected_avg).abs() < 1e-9);

    // Gadget and Gizmo tie at 3.50; Gadget was inserted earlier and wins
    assert_eq!(stats.cheapest.name, "Gadget");
    assert_eq!(stats.most_expensive.name, "Widget");
}

// =============================================================================
// ID allocation
// =============================================================================

/// IDs are strictly increasing from 1 with no gaps, and removals never
/// cause reuse.
#[test]
fn e2e_ids_monotonic_across_removals() {
    let mut state = AppState::new(MIN_NAME_LEN);

    let mut expected = 1u64;
    for round in 0..5 {
        let id = state
            .add_product(&format!("Product {round}"), 1.0 + round as f64, "other")
            .unwrap();
        assert_eq!(id, expected);
        expected += 1;

        // Remove every other product as we go
        if round % 2 == 0 {
            state.remove_product(id);
        }
    }

    let id = state.add_product("Final product", 2.0, "other").unwrap();
    assert_eq!(id, 6);
}

/// Removing the same ID twice: the second call reports not-found and
/// leaves the catalog unchanged.
#[test]
fn e2e_remove_is_idempotent() {
    let mut state = session_with_catalog();

    assert!(state.remove_product(2).is_some());
    let before: Vec<u64> = state.catalog().iter().map(|p| p.id).collect();

    assert!(state.remove_product(2).is_none());
    let after: Vec<u64> = state.catalog().iter().map(|p| p.id).collect();
    assert_eq!(before, after);
}

// =============================================================================
// Views
// =============================================================================

/// The default spec is the identity filter: exact insertion order.
#[test]
fn e2e_identity_filter_returns_insertion_order() {
    let state = session_with_catalog();
    assert!(state.filter_spec().is_identity());
    assert_eq!(state.view_indices(), &[0, 1, 2]);
}

/// Search is a case-insensitive substring match.
#[test]
fn e2e_search_is_case_insensitive() {
    let mut state = session_with_catalog();
    state.set_search("WID");
    let names: Vec<_> = state.view_products().iter().map(|p| p.name.clone()).collect();
    assert_eq!(names, vec!["Widget"]);
}

/// Equal-price products keep insertion order under both sort directions.
#[test]
fn e2e_sorting_is_stable() {
    let mut state = AppState::new(MIN_NAME_LEN);
    state.add_product("Alpha", 10.0, "other").unwrap(); // A
    state.add_product("Bravo", 10.0, "other").unwrap(); // B
    state.add_product("Charlie", 5.0, "other").unwrap(); // C

    state.set_sort(SortOrder::Ascending);
    let names: Vec<_> = state.view_products().iter().map(|p| p.name.clone()).collect();
    assert_eq!(names, vec!["Charlie", "Alpha", "Bravo"]);

    state.set_sort(SortOrder::Descending);
    let names: Vec<_> = state.view_products().iter().map(|p| p.name.clone()).collect();
    assert_eq!(names, vec!["Alpha", "Bravo", "Charlie"]);
}

// =============================================================================
// Statistics edge cases
// =============================================================================

/// An empty catalog yields the distinct "no data" signal, never a
/// zero-count Statistics value.
#[test]
fn e2e_statistics_empty_catalog_signals_no_data() {
    let state = AppState::new(MIN_NAME_LEN);
    assert!(state.statistics().is_none());

    // After removing the only product, the signal returns
    let mut state = AppState::new(MIN_NAME_LEN);
    let id = state.add_product("Widget", 9.99, "tools").unwrap();
    assert!(state.statistics().is_some());
    state.remove_product(id);
    assert!(state.statistics().is_none());
}

// =============================================================================
// Validation
// =============================================================================

/// All violations are reported together so the user can fix them in one
/// pass, and nothing is added to the catalog.
#[test]
fn e2e_validation_collects_every_violation() {
    let mut state = AppState::new(MIN_NAME_LEN);
    let err = state.add_product(" x ", -3.0, "  ").unwrap_err();

    let fields: Vec<_> = err.violations.iter().map(|v| v.field).collect();
    assert_eq!(fields, vec!["name", "price", "category"]);
    assert!(state.catalog().is_empty());
    assert!(state.statistics().is_none());
}

// =============================================================================
// Export
// =============================================================================

/// Exporting a filtered, sorted view to a real file on disk writes
/// exactly the visible rows in view order.
#[test]
fn e2e_export_filtered_view_to_csv_file() {
    let mut state = session_with_catalog();
    state.set_category(Some("tools".to_string()));
    state.set_sort(SortOrder::Ascending);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("view.csv");
    let file = std::fs::File::create(&path).unwrap();

    let count = export::export_csv(state.catalog(), state.view_indices(), file, &path).unwrap();
    assert_eq!(count, 2);

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines[0], "id,name,price,category,registered_at");
    assert!(lines[1].contains("Gadget"));
    assert!(lines[2].contains("Widget"));
    assert!(!content.contains("Gizmo"));
}

/// JSON export of the same view round-trips through serde_json.
#[test]
fn e2e_export_view_to_json_file() {
    let mut state = session_with_catalog();
    state.set_search("gi");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("view.json");
    let file = std::fs::File::create(&path).unwrap();

    let count = export::export_json(state.catalog(), state.view_indices(), file, &path).unwrap();
    assert_eq!(count, 1);

    let content = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    let array = parsed.as_array().unwrap();
    assert_eq!(array.len(), 1);
    assert_eq!(array[0]["name"], "Gizmo");
    assert_eq!(array[0]["category"], "electronics");
}

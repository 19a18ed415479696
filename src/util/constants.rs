// Stocklist - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "Stocklist";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "Stocklist";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Catalog limits
// =============================================================================

/// Minimum product name length after trimming surrounding whitespace.
pub const MIN_NAME_LEN: usize = 3;

/// Lowest value the `[catalog] min_name_len` config override may take.
pub const MIN_MIN_NAME_LEN: usize = 1;

/// Highest value the `[catalog] min_name_len` config override may take.
pub const MAX_MIN_NAME_LEN: usize = 64;

/// First product ID allocated by a fresh store. IDs count up from here
/// and are never reused, even after removals.
pub const FIRST_PRODUCT_ID: u64 = 1;

/// Hard upper bound on the number of products held in memory at once.
///
/// The catalog is session-scoped and grows only through discrete user
/// actions, so this bound is generous. It keeps a misbehaving caller
/// (e.g. a scripted import loop) from growing the Vec without limit.
pub const MAX_CATALOG_ENTRIES: usize = 100_000;

// =============================================================================
// Category defaults
// =============================================================================

/// Categories offered by the presentation layer when no config overrides
/// them. The core treats category as an opaque string and never validates
/// membership in this set.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "electronics",
    "clothing",
    "food",
    "books",
    "tools",
    "other",
];

// =============================================================================
// Export
// =============================================================================

/// Maximum number of products that can be exported in a single operation.
pub const MAX_EXPORT_ENTRIES: usize = 1_000_000;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

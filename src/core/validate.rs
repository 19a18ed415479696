// Stocklist - core/validate.rs
//
// Product input validation, performed before a product is constructed.
// Violations are collected and reported together — never short-circuited
// on the first failure — so the caller can display every problem in one
// pass.

use crate::util::constants::MIN_NAME_LEN;
use crate::util::error::{ValidationError, Violation};

/// Validate raw product input prior to `CatalogStore::add`.
///
/// Checks, against the trimmed inputs:
/// - name is non-empty and at least `min_name_len` characters;
/// - price is a finite number greater than zero;
/// - category is non-empty (membership in the configured category set is
///   not checked here — the core treats category as opaque).
pub fn validate_product(
    name: &str,
    price: f64,
    category: &str,
    min_name_len: usize,
) -> std::result::Result<(), ValidationError> {
    let mut violations = Vec::new();

    let name = name.trim();
    if name.is_empty() {
        violations.push(Violation {
            field: "name",
            reason: "must not be empty".to_string(),
        });
    } else if name.chars().count() < min_name_len {
        violations.push(Violation {
            field: "name",
            reason: format!("must be at least {min_name_len} characters"),
        });
    }

    if !price.is_finite() {
        violations.push(Violation {
            field: "price",
            reason: "must be a number".to_string(),
        });
    } else if price <= 0.0 {
        violations.push(Violation {
            field: "price",
            reason: format!("must be greater than zero, got {price}"),
        });
    }

    if category.trim().is_empty() {
        violations.push(Violation {
            field: "category",
            reason: "must not be empty".to_string(),
        });
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(violations))
    }
}

/// Validate with the default minimum name length.
pub fn validate_product_default(
    name: &str,
    price: f64,
    category: &str,
) -> std::result::Result<(), ValidationError> {
    validate_product(name, price, category, MIN_NAME_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input_passes() {
        assert!(validate_product_default("Widget", 9.99, "tools").is_ok());
    }

    #[test]
    fn test_name_too_short_after_trim() {
        let err = validate_product_default("  ab  ", 1.0, "tools").unwrap_err();
        assert!(err.has_field("name"));
        assert_eq!(err.violations.len(), 1);
    }

    #[test]
    fn test_minimum_length_name_passes() {
        assert!(validate_product_default("abc", 1.0, "tools").is_ok());
    }

    #[test]
    fn test_all_violations_collected_not_short_circuited() {
        let err = validate_product_default("", -2.0, "  ").unwrap_err();
        assert_eq!(err.violations.len(), 3);
        assert!(err.has_field("name"));
        assert!(err.has_field("price"));
        assert!(err.has_field("category"));
    }

    #[test]
    fn test_non_finite_price_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = validate_product_default("Widget", bad, "tools").unwrap_err();
            assert!(err.has_field("price"));
        }
    }

    #[test]
    fn test_zero_price_rejected() {
        let err = validate_product_default("Widget", 0.0, "tools").unwrap_err();
        assert!(err.has_field("price"));
    }

    #[test]
    fn test_custom_min_name_len() {
        assert!(validate_product("abcd", 1.0, "tools", 5).is_err());
        assert!(validate_product("abcde", 1.0, "tools", 5).is_ok());
    }
}

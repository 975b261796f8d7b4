//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported
//! and accessible via absolute paths.

use proptest::prelude::*;

/// Test that grid helpers are accessible via absolute path.
#[test]
fn test_math_module_exports() {
    use pricer_core::math::grid::linspace;
    use pricer_core::math::linspace as reexported;

    assert_eq!(linspace(0.0, 1.0, 3).unwrap(), reexported(0.0, 1.0, 3).unwrap());
}

/// Test that types module is accessible via absolute path.
#[test]
fn test_types_module_exports() {
    use pricer_core::types::error::PricingError;
    use pricer_core::types::greek::Greek;
    use pricer_core::types::option::OptionType;

    let err: PricingError = "butterfly".parse::<OptionType>().unwrap_err();
    assert!(matches!(err, PricingError::InvalidOptionType(_)));

    let err: PricingError = "volga".parse::<Greek>().unwrap_err();
    assert!(matches!(err, PricingError::UnknownGreek(_)));
}

/// Test that re-exports at the types level work.
#[test]
fn test_types_reexports() {
    use pricer_core::types::{Greek, OptionType, PricingError};

    assert_eq!(OptionType::ALL.len(), 2);
    assert_eq!(Greek::ALL.len(), 5);
    let _ = PricingError::InvalidInput("x".to_string());
}

proptest! {
    #[test]
    fn prop_linspace_is_monotonic(start in -1e3f64..1e3, width in 1e-3f64..1e3, n in 2usize..200) {
        let grid = pricer_core::math::linspace(start, start + width, n).unwrap();
        prop_assert_eq!(grid.len(), n);
        prop_assert_eq!(grid[0], start);
        prop_assert_eq!(grid[n - 1], start + width);
        for pair in grid.windows(2) {
            prop_assert!(pair[1] >= pair[0]);
        }
    }
}

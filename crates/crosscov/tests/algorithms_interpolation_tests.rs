#![cfg(feature = "dev")]
//! Tests for grid functions and linear interpolation.
//!
//! ## Test Organization
//!
//! 1. **Construction** - Grid validation
//! 2. **Interpolation** - Interior, knots, constant extrapolation
//! 3. **Batch Interpolation** - Agreement with pointwise evaluation

use approx::assert_relative_eq;

use crosscov::internals::algorithms::interpolation::{interpolate_at, interpolate_sorted_batch};
use crosscov::prelude::*;

// ============================================================================
// Construction Tests
// ============================================================================

/// Test grid validation errors.
#[test]
fn test_grid_function_validation() {
    assert_eq!(
        GridFunction::<f64>::new(vec![], vec![]).unwrap_err(),
        CrossCovError::EmptyInput
    );
    assert!(matches!(
        GridFunction::new(vec![0.0, 1.0], vec![1.0]),
        Err(CrossCovError::InvalidInput(_))
    ));
    assert!(matches!(
        GridFunction::new(vec![0.0, f64::INFINITY], vec![1.0, 2.0]),
        Err(CrossCovError::InvalidNumericValue(_))
    ));
    assert!(matches!(
        GridFunction::new(vec![0.0, 1.0], vec![1.0, f64::NAN]),
        Err(CrossCovError::InvalidNumericValue(_))
    ));
    assert!(matches!(
        GridFunction::new(vec![0.0, 0.5, 0.5], vec![1.0, 2.0, 3.0]),
        Err(CrossCovError::InvalidInput(_))
    ));
}

/// Test accessors and decomposition.
#[test]
fn test_grid_function_parts() {
    let f = GridFunction::new(vec![0.0, 0.5, 1.0], vec![1.0, 2.0, 0.0]).unwrap();

    assert_eq!(f.len(), 3);
    assert!(!f.is_empty());
    assert_eq!(f.grid(), &[0.0, 0.5, 1.0]);
    assert_eq!(f.values(), &[1.0, 2.0, 0.0]);

    let (grid, values) = f.into_parts();
    assert_eq!(grid, vec![0.0, 0.5, 1.0]);
    assert_eq!(values, vec![1.0, 2.0, 0.0]);
}

// ============================================================================
// Interpolation Tests
// ============================================================================

/// Test interior interpolation and exact knots.
#[test]
fn test_evaluate_interior() {
    let f = GridFunction::new(vec![0.0, 0.5, 1.0], vec![1.0, 2.0, 0.0]).unwrap();

    assert_eq!(f.evaluate(0.5), 2.0);
    assert_relative_eq!(f.evaluate(0.25), 1.5, epsilon = 1e-15);
    assert_relative_eq!(f.evaluate(0.75), 1.0, epsilon = 1e-15);
}

/// Test constant extrapolation beyond the grid.
#[test]
fn test_evaluate_extrapolation() {
    let f = GridFunction::new(vec![0.0, 0.5, 1.0], vec![1.0, 2.0, 0.0]).unwrap();

    assert_eq!(f.evaluate(-3.0), 1.0);
    assert_eq!(f.evaluate(7.0), 0.0);
}

/// Test a single-point grid is constant.
#[test]
fn test_single_point_grid() {
    let f = GridFunction::new(vec![0.3], vec![4.0]).unwrap();
    assert_eq!(f.evaluate_many(&[-1.0, 0.3, 2.0]), vec![4.0; 3]);
    assert_eq!(interpolate_at(&[0.3], &[4.0], 0.9), 4.0);
}

/// Test an empty grid evaluates to zero.
#[test]
fn test_interpolate_empty_grid() {
    assert_eq!(interpolate_at::<f64>(&[], &[], 0.5), 0.0);
}

// ============================================================================
// Batch Interpolation Tests
// ============================================================================

/// Test the sorted batch agrees with pointwise interpolation.
#[test]
fn test_batch_matches_pointwise() {
    let grid = [0.0, 0.2, 0.5, 0.9, 1.0];
    let values = [0.0, 1.0, -1.0, 2.0, 2.5];
    let xs = [-0.5, 0.0, 0.1, 0.2, 0.2, 0.35, 0.7, 0.95, 1.0, 1.5];

    let mut out = vec![0.0; xs.len()];
    interpolate_sorted_batch(&grid, &values, &xs, &mut out);

    for (&x, &o) in xs.iter().zip(&out) {
        assert_eq!(o, interpolate_at(&grid, &values, x), "x = {x}");
    }
}

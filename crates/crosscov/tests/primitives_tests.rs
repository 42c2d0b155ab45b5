#![cfg(feature = "dev")]
//! Tests for data primitives.
//!
//! These tests verify the low-level containers and helpers:
//! - Sorting of raw samples with index tracking
//! - Radius windows over sorted locations
//! - Sparse and dense subject containers
//! - Scratch buffers
//!
//! ## Test Organization
//!
//! 1. **Sorting** - Ordering, weights, distinct values
//! 2. **Windows** - Inclusive radius bounds
//! 3. **Samples** - Dense layout and conversion
//! 4. **Buffers** - Preparation and reuse

use crosscov::internals::primitives::buffer::SmoothBuffer;
use crosscov::internals::primitives::sorting::{distinct_sorted, sort_samples, sorted_unique};
use crosscov::internals::primitives::window::Window;
use crosscov::prelude::*;

// ============================================================================
// Sorting Tests
// ============================================================================

/// Test samples are sorted with the permutation recorded.
#[test]
fn test_sort_samples() {
    let x = [0.5, 0.1, 0.9, 0.3];
    let y = [5.0, 1.0, 9.0, 3.0];
    let w = [0.2, 0.4, 0.6, 0.8];

    let sorted = sort_samples(&x, &y, Some(&w[..]));

    assert_eq!(sorted.x, vec![0.1, 0.3, 0.5, 0.9]);
    assert_eq!(sorted.y, vec![1.0, 3.0, 5.0, 9.0]);
    assert_eq!(sorted.w, vec![0.4, 0.8, 0.2, 0.6]);
    assert_eq!(sorted.indices, vec![1, 3, 0, 2]);
    assert_eq!(sorted.len(), 4);
    assert!((sorted.range() - 0.8_f64).abs() < 1e-15);
}

/// Test missing weights default to one and sorted input is kept.
#[test]
fn test_sort_samples_presorted() {
    let x = [0.0, 0.0, 1.0];
    let y = [2.0, 1.0, 3.0];

    let sorted = sort_samples(&x, &y, None);

    assert_eq!(sorted.y, vec![2.0, 1.0, 3.0]);
    assert_eq!(sorted.w, vec![1.0; 3]);
    assert_eq!(sorted.indices, vec![0, 1, 2]);
}

/// Test distinct-value helpers.
#[test]
fn test_distinct_values() {
    assert_eq!(sorted_unique(&[0.5, 0.0, 0.5, 1.0, 0.0]), vec![0.0, 0.5, 1.0]);
    assert_eq!(distinct_sorted(&[0.0, 0.0, 0.2, 0.2, 0.2, 0.7]), vec![0.0, 0.2, 0.7]);
    assert!(distinct_sorted::<f64>(&[]).is_empty());
}

// ============================================================================
// Window Tests
// ============================================================================

/// Test windows include points exactly on the radius.
#[test]
fn test_window_inclusive() {
    let x = [0.0, 0.25, 0.5, 0.75, 1.0];

    let w = Window::around(&x, 0.5, 0.25);
    assert_eq!(w, Window { left: 1, right: 4 });
    assert_eq!(w.len(), 3);
}

/// Test windows at the data edges and outside the data.
#[test]
fn test_window_edges() {
    let x = [0.0, 0.25, 0.5, 0.75, 1.0];

    assert_eq!(Window::around(&x, 0.0, 0.3), Window { left: 0, right: 2 });
    assert_eq!(Window::around(&x, 1.0, 10.0), Window { left: 0, right: 5 });
    assert_eq!(Window::around(&x, 3.0, 0.5).len(), 0);
    assert_eq!(Window::around(&x, 0.1, 0.05).len(), 0);
    assert_eq!(Window::full(x.len()), Window { left: 0, right: 5 });
}

/// Test windows keep every copy of a repeated location.
#[test]
fn test_window_duplicates() {
    let x = [0.0, 0.5, 0.5, 0.5, 1.0];
    assert_eq!(Window::around(&x, 0.5, 0.1).len(), 3);
}

// ============================================================================
// Sample Container Tests
// ============================================================================

/// Test the dense layout is row-major.
#[test]
fn test_dense_layout() {
    let dense = DenseSamples::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();

    assert_eq!(dense.n_subjects(), 2);
    assert_eq!(dense.n_points(), 3);
    assert_eq!(dense.row(1), &[4.0, 5.0, 6.0]);
    assert_eq!(dense.get(0, 2), 3.0);
    assert!(dense.grid().is_none());
}

/// Test dense construction errors.
#[test]
fn test_dense_shape_errors() {
    assert!(matches!(
        DenseSamples::new(vec![1.0, 2.0, 3.0], 2, 2),
        Err(CrossCovError::InvalidInput(_))
    ));
    assert!(matches!(
        DenseSamples::from_rows(&[vec![1.0, 2.0], vec![3.0]]),
        Err(CrossCovError::InvalidInput(_))
    ));

    let dense = DenseSamples::new(vec![1.0, 2.0], 1, 2).unwrap();
    assert!(matches!(
        dense.with_grid(vec![0.0]),
        Err(CrossCovError::InvalidInput(_))
    ));
}

/// Test dense rows convert to subjects, dropping missing cells.
#[test]
fn test_dense_to_subjects() {
    let dense = DenseSamples::from_rows(&[vec![1.0, f64::NAN, 3.0], vec![4.0, 5.0, 6.0]])
        .unwrap()
        .with_grid(vec![0.0, 0.5, 1.0])
        .unwrap();

    let subjects = dense.to_subjects().unwrap();

    assert_eq!(subjects.len(), 2);
    assert_eq!(subjects[0], SubjectSample::new(vec![0.0, 1.0], vec![1.0, 3.0]));
    assert_eq!(subjects[1].t, vec![0.0, 0.5, 1.0]);
}

/// Test conversion without a grid is rejected.
#[test]
fn test_dense_to_subjects_without_grid() {
    let dense = DenseSamples::new(vec![1.0, 2.0], 1, 2).unwrap();
    assert_eq!(
        dense.to_subjects().unwrap_err(),
        CrossCovError::MissingRequiredInput("time grid")
    );
}

/// Test the tagged input reports its subject count.
#[test]
fn test_subject_samples() {
    let sparse: SubjectSamples<f64> = vec![
        SubjectSample::new(vec![0.0], vec![1.0]),
        SubjectSample::new(vec![0.5, 1.0], vec![2.0, 3.0]),
    ]
    .into();
    assert_eq!(sparse.n_subjects(), 2);
    assert!(sparse.has_time_grid());

    let dense: SubjectSamples<f64> = DenseSamples::new(vec![1.0; 6], 3, 2).unwrap().into();
    assert_eq!(dense.n_subjects(), 3);
    assert!(!dense.has_time_grid());
}

// ============================================================================
// Buffer Tests
// ============================================================================

/// Test preparation resizes and zeroes both slots.
#[test]
fn test_buffer_prepare() {
    let mut buffer = SmoothBuffer::with_capacity(8);
    buffer.prepare(5);
    buffer.weights[2] = 1.5;
    buffer.centered[4] = -0.5;

    buffer.prepare(3);
    assert_eq!(buffer.weights, vec![0.0; 3]);
    assert_eq!(buffer.centered, vec![0.0; 3]);
}

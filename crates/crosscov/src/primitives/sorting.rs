//! Ordering utilities for scattered smoother input.
//!
//! ## Purpose
//!
//! The local linear smoother windows its input by location, so every call
//! starts by ordering the `(x, y, w)` triples by `x`. This module owns that
//! step and the helpers that derive sorted, de-duplicated location sets.
//!
//! ## Design notes
//!
//! * **Stability**: Stable sort, so tied locations keep their insertion order
//!   and repeated calls produce bit-identical sums.
//! * **Fast path**: Already-sorted input is copied without sorting.
//!
//! ## Invariants
//!
//! * Sorted locations are non-decreasing (inputs are validated finite upstream).
//! * `indices` is a permutation of `0..n` with `indices[sorted_pos] = original_pos`.
//!
//! ## Non-goals
//!
//! * This module does not validate input values.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Data Structures
// ============================================================================

/// Scattered smoother input ordered by location.
#[derive(Debug, Clone, PartialEq)]
pub struct SortedSamples<T> {
    /// Locations, non-decreasing.
    pub x: Vec<T>,

    /// Responses reordered to match `x`.
    pub y: Vec<T>,

    /// Observation weights reordered to match `x`.
    pub w: Vec<T>,

    /// Index mapping where `indices[sorted_pos] = original_pos`.
    pub indices: Vec<usize>,
}

impl<T: Float> SortedSamples<T> {
    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether there are no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Full range `max(x) - min(x)` (zero when empty).
    pub fn range(&self) -> T {
        match (self.x.first(), self.x.last()) {
            (Some(&lo), Some(&hi)) => hi - lo,
            _ => T::zero(),
        }
    }
}

// ============================================================================
// Sorting Functions
// ============================================================================

/// Sort `(x, y, w)` triples by `x` in ascending order.
///
/// A `None` weight slice means unit weights.
pub fn sort_samples<T: Float>(x: &[T], y: &[T], w: Option<&[T]>) -> SortedSamples<T> {
    let n = x.len();
    let weight_at = |i: usize| w.map_or(T::one(), |w| w[i]);

    if x.windows(2).all(|p| p[0] <= p[1]) {
        return SortedSamples {
            x: x.to_vec(),
            y: y.to_vec(),
            w: (0..n).map(weight_at).collect(),
            indices: (0..n).collect(),
        };
    }

    // Sort (x, index) pairs only; y and w are gathered afterwards
    let mut pairs: Vec<(T, usize)> = x.iter().enumerate().map(|(i, &xi)| (xi, i)).collect();
    pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    SortedSamples {
        x: pairs.iter().map(|p| p.0).collect(),
        y: pairs.iter().map(|p| y[p.1]).collect(),
        w: pairs.iter().map(|p| weight_at(p.1)).collect(),
        indices: pairs.iter().map(|p| p.1).collect(),
    }
}

/// Sorted, de-duplicated copy of `values`.
pub fn sorted_unique<T: Float>(values: &[T]) -> Vec<T> {
    let mut out = values.to_vec();
    out.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    out.dedup();
    out
}

/// Distinct values of an already sorted slice.
pub fn distinct_sorted<T: Float>(sorted: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(sorted.len());
    for &v in sorted {
        if out.last().map_or(true, |&last| v > last) {
            out.push(v);
        }
    }
    out
}

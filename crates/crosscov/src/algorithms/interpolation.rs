//! Piecewise-linear functions on a sorted grid.
//!
//! ## Purpose
//!
//! This module provides [`GridFunction`], the representation used both for
//! the caller's mean reference and for the smoothed cross-covariance curve,
//! together with the interpolation routines that evaluate it.
//!
//! ## Design notes
//!
//! * **Interpolation**: Linear between bracketing grid points.
//! * **Extrapolation**: Constant, using the first or last value.
//! * **Batch evaluation**: Sorted queries share a forward-scanning bracket.
//!
//! ## Invariants
//!
//! * Grid locations are finite and strictly increasing.
//! * Grid and values have the same, non-zero length.
//!
//! ## Non-goals
//!
//! * This module does not provide higher-order interpolation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::CrossCovError;

// ============================================================================
// Grid Function
// ============================================================================

/// A function sampled on a strictly increasing grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridFunction<T> {
    grid: Vec<T>,
    values: Vec<T>,
}

impl<T: Float> GridFunction<T> {
    /// Create a grid function, validating the grid.
    pub fn new(grid: Vec<T>, values: Vec<T>) -> Result<Self, CrossCovError> {
        if grid.is_empty() {
            return Err(CrossCovError::EmptyInput);
        }
        if grid.len() != values.len() {
            return Err(CrossCovError::InvalidInput(format!(
                "grid has {} locations but {} values",
                grid.len(),
                values.len()
            )));
        }
        if let Some(i) = grid.iter().position(|v| !v.is_finite()) {
            return Err(CrossCovError::InvalidNumericValue(format!(
                "grid location at index {i} is not finite"
            )));
        }
        if let Some(i) = values.iter().position(|v| !v.is_finite()) {
            return Err(CrossCovError::InvalidNumericValue(format!(
                "grid value at index {i} is not finite"
            )));
        }
        if let Some(i) = grid.windows(2).position(|w| w[1] <= w[0]) {
            return Err(CrossCovError::InvalidInput(format!(
                "grid must be strictly increasing (index {})",
                i + 1
            )));
        }

        Ok(Self { grid, values })
    }

    // Build from a grid and values already known to satisfy the invariants.
    pub(crate) fn from_parts(grid: Vec<T>, values: Vec<T>) -> Self {
        debug_assert_eq!(grid.len(), values.len());
        Self { grid, values }
    }

    /// Grid locations.
    #[inline]
    pub fn grid(&self) -> &[T] {
        &self.grid
    }

    /// Values at the grid locations.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Number of grid points.
    #[inline]
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    /// Whether the grid is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// Evaluate at a single location.
    #[inline]
    pub fn evaluate(&self, x: T) -> T {
        interpolate_at(&self.grid, &self.values, x)
    }

    /// Evaluate at many locations (any order).
    pub fn evaluate_many(&self, xs: &[T]) -> Vec<T> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// Consume into `(grid, values)`.
    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        (self.grid, self.values)
    }
}

// ============================================================================
// Linear Interpolation
// ============================================================================

/// Interpolate `(grid, values)` at `x` with constant extrapolation.
///
/// Returns zero for an empty grid.
pub fn interpolate_at<T: Float>(grid: &[T], values: &[T], x: T) -> T {
    let n = grid.len();
    if n == 0 {
        return T::zero();
    }
    if n == 1 || x <= grid[0] {
        return values[0];
    }
    if x >= grid[n - 1] {
        return values[n - 1];
    }

    // grid[right - 1] <= x < grid[right]
    let right = grid.partition_point(|&g| g <= x);
    let left = right - 1;
    lerp(grid[left], grid[right], values[left], values[right], x)
}

/// Interpolate at sorted query locations, writing into `out`.
pub fn interpolate_sorted_batch<T: Float>(grid: &[T], values: &[T], xs: &[T], out: &mut [T]) {
    let n = grid.len();
    if n == 0 {
        out.fill(T::zero());
        return;
    }
    if n == 1 {
        out.fill(values[0]);
        return;
    }

    let mut left = 0;
    for (slot, &x) in out.iter_mut().zip(xs) {
        if x <= grid[0] {
            *slot = values[0];
            continue;
        }
        if x >= grid[n - 1] {
            *slot = values[n - 1];
            continue;
        }

        // Scan forward to the bracket
        while left + 1 < n && grid[left + 1] <= x {
            left += 1;
        }
        *slot = lerp(grid[left], grid[left + 1], values[left], values[left + 1], x);
    }
}

#[inline]
fn lerp<T: Float>(x0: T, x1: T, y0: T, y1: T, x: T) -> T {
    let denom = x1 - x0;
    if denom <= T::zero() {
        return y0;
    }
    y0 + (x - x0) / denom * (y1 - y0)
}

//! Windowing primitives for local linear smoothing.
//!
//! This module locates the contiguous slice of a sorted location array that
//! falls within a fixed radius of an output location.

// External dependencies
use num_traits::Float;

// Half-open window bounds `[left, right)` into a sorted location array.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Window {
    // Left boundary index (inclusive).
    pub left: usize,

    // Right boundary index (exclusive).
    pub right: usize,
}

impl Window {
    // Window of all `x` with `|x - center| <= radius`.
    #[inline]
    pub fn around<T: Float>(x: &[T], center: T, radius: T) -> Self {
        let lo = center - radius;
        let hi = center + radius;
        let left = x.partition_point(|&v| v < lo);
        let right = left + x[left..].partition_point(|&v| v <= hi);
        Self { left, right }
    }

    // Window covering all `n` locations.
    #[inline]
    pub fn full(n: usize) -> Self {
        Self { left: 0, right: n }
    }

    // Get the number of points in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.right - self.left
    }
}

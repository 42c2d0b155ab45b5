//! Reusable scratch space for smoothing passes.
//!
//! ## Purpose
//!
//! A smoothing pass evaluates one local fit per output location, and a GCV
//! search runs one pass per candidate bandwidth. The per-location kernel
//! weights are written into a scratch vector that is allocated once and
//! recycled, which keeps the candidate loop allocation-free after warm-up.
//!
//! ## Invariants
//!
//! * Buffers are only logically cleared between fits, never shrunk.
//!
//! ## Non-goals
//!
//! * Thread-local caching (parallel callers hold one buffer per worker).

// Feature-gated dependencies
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Zero;

// ============================================================================
// Smoothing Buffer
// ============================================================================

/// Scratch space for one smoothing pass.
#[derive(Debug, Clone)]
pub struct SmoothBuffer<T> {
    /// Combined kernel x observation weights of the current window.
    pub weights: Vec<T>,

    /// Window-local locations, centred on the current output location.
    pub centered: Vec<T>,
}

impl<T> Default for SmoothBuffer<T> {
    fn default() -> Self {
        Self {
            weights: Vec::new(),
            centered: Vec::new(),
        }
    }
}

impl<T: Zero + Copy> SmoothBuffer<T> {
    /// Create a buffer sized for windows of up to `capacity` samples.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            weights: Vec::with_capacity(capacity),
            centered: Vec::with_capacity(capacity),
        }
    }

    /// Reset both slots to `len` zeros, reusing capacity.
    #[inline]
    pub fn prepare(&mut self, len: usize) {
        self.weights.clear();
        self.weights.resize(len, T::zero());
        self.centered.clear();
        self.centered.resize(len, T::zero());
    }
}

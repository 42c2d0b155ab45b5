//! Local linear regression.
//!
//! ## Purpose
//!
//! This module provides the local linear kernel smoother: the moment
//! accumulators (generic and SIMD-optimized), the closed-form intercept
//! solve, the per-location fitting context, and a sequential pass over an
//! output grid.
//!
//! ## Design notes
//!
//! * **Centred design**: Locations are centred on the output location before
//!   accumulation, so the fitted value is the intercept of the local line.
//! * **Unified failure**: Too little support, a singular design, and a
//!   non-finite intercept all report a single [`LocalFitFailure`].
//! * **SIMD**: `f64` and `f32` accumulate moments with `wide` vectors; other
//!   `Float` types fall back to the scalar loop.
//!
//! ## Invariants
//!
//! * Inputs to a pass are sorted by location (see [`crate::primitives::sorting`]).
//! * Observation weights are finite and non-negative.
//!
//! ## Non-goals
//!
//! * This module does not choose the bandwidth.
//! * This module does not validate user input.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;
use wide::{f32x8, f64x2};

// Internal dependencies
use crate::math::kernel::WeightFunction;
use crate::primitives::buffer::SmoothBuffer;
use crate::primitives::errors::CrossCovError;
use crate::primitives::sorting::SortedSamples;
use crate::primitives::window::Window;

/// Relative tolerance for the local design determinant.
const SINGULAR_TOL: f64 = 1e-12;

// ============================================================================
// Local Fit Failure
// ============================================================================

/// A local fit that could not be computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalFitFailure<T> {
    /// Output location of the failed fit.
    pub location: T,

    /// Number of distinct input locations with positive weight.
    pub support: usize,
}

impl<T: Float> LocalFitFailure<T> {
    /// Convert into the fatal error raised when the bandwidth was supplied.
    pub fn into_error(self, bandwidth: T) -> CrossCovError {
        CrossCovError::LocalFitFailure {
            location: self.location.to_f64().unwrap_or(f64::NAN),
            bandwidth: bandwidth.to_f64().unwrap_or(f64::NAN),
            support: self.support,
        }
    }
}

// ============================================================================
// Local Moments
// ============================================================================

/// Weighted moments of a centred local design.
///
/// With `d = x - x0`: `s0 = Σw`, `s1 = Σw·d`, `s2 = Σw·d²`, `t0 = Σw·y`, `t1 = Σw·d·y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalMoments<T> {
    /// Sum of weights.
    pub s0: T,
    /// First weighted moment of the centred locations.
    pub s1: T,
    /// Second weighted moment of the centred locations.
    pub s2: T,
    /// Weighted sum of responses.
    pub t0: T,
    /// Weighted cross moment of centred locations and responses.
    pub t1: T,
}

impl<T: Float> LocalMoments<T> {
    /// Intercept of the weighted least squares line, or `None` if singular.
    #[inline]
    pub fn intercept(&self) -> Option<T> {
        if self.s0 <= T::zero() {
            return None;
        }

        let det = self.s0 * self.s2 - self.s1 * self.s1;
        let tol = T::from(SINGULAR_TOL).unwrap_or_else(T::epsilon) * self.s0 * self.s2;
        if det.is_nan() || det <= tol {
            return None;
        }

        let value = (self.s2 * self.t0 - self.s1 * self.t1) / det;
        value.is_finite().then_some(value)
    }
}

// ============================================================================
// Generic Accumulation
// ============================================================================

/// Scalar accumulation of local moments (generic Float).
#[inline]
pub fn accumulate_moments_scalar<T: Float>(d: &[T], y: &[T], weights: &[T]) -> LocalMoments<T> {
    let mut m = LocalMoments {
        s0: T::zero(),
        s1: T::zero(),
        s2: T::zero(),
        t0: T::zero(),
        t1: T::zero(),
    };

    for ((&w, &dx), &yv) in weights.iter().zip(d).zip(y) {
        let wd = w * dx;
        m.s0 = m.s0 + w;
        m.s1 = m.s1 + wd;
        m.s2 = m.s2 + wd * dx;
        m.t0 = m.t0 + w * yv;
        m.t1 = m.t1 + wd * yv;
    }

    m
}

// ============================================================================
// Specialized Accumulation (SIMD)
// ============================================================================

/// SIMD-optimized accumulation of local moments (f64).
#[inline]
pub fn accumulate_moments_simd_f64(d: &[f64], y: &[f64], weights: &[f64]) -> LocalMoments<f64> {
    let n = d.len().min(y.len()).min(weights.len());

    let mut s0 = f64x2::splat(0.0);
    let mut s1 = f64x2::splat(0.0);
    let mut s2 = f64x2::splat(0.0);
    let mut t0 = f64x2::splat(0.0);
    let mut t1 = f64x2::splat(0.0);

    let mut i = 0;
    while i + 2 <= n {
        let w = f64x2::new([weights[i], weights[i + 1]]);
        let dx = f64x2::new([d[i], d[i + 1]]);
        let yv = f64x2::new([y[i], y[i + 1]]);

        let wd = w * dx;
        s0 += w;
        s1 += wd;
        s2 += wd * dx;
        t0 += w * yv;
        t1 += wd * yv;

        i += 2;
    }

    let mut m = LocalMoments {
        s0: s0.reduce_add(),
        s1: s1.reduce_add(),
        s2: s2.reduce_add(),
        t0: t0.reduce_add(),
        t1: t1.reduce_add(),
    };

    while i < n {
        let wd = weights[i] * d[i];
        m.s0 += weights[i];
        m.s1 += wd;
        m.s2 += wd * d[i];
        m.t0 += weights[i] * y[i];
        m.t1 += wd * y[i];
        i += 1;
    }

    m
}

/// SIMD-optimized accumulation of local moments (f32).
#[inline]
pub fn accumulate_moments_simd_f32(d: &[f32], y: &[f32], weights: &[f32]) -> LocalMoments<f32> {
    let n = d.len().min(y.len()).min(weights.len());

    let mut s0 = f32x8::splat(0.0);
    let mut s1 = f32x8::splat(0.0);
    let mut s2 = f32x8::splat(0.0);
    let mut t0 = f32x8::splat(0.0);
    let mut t1 = f32x8::splat(0.0);

    let load = |s: &[f32], i: usize| -> f32x8 {
        let mut lanes = [0.0f32; 8];
        lanes.copy_from_slice(&s[i..i + 8]);
        f32x8::new(lanes)
    };

    let mut i = 0;
    while i + 8 <= n {
        let w = load(weights, i);
        let dx = load(d, i);
        let yv = load(y, i);

        let wd = w * dx;
        s0 += w;
        s1 += wd;
        s2 += wd * dx;
        t0 += w * yv;
        t1 += wd * yv;

        i += 8;
    }

    let mut m = LocalMoments {
        s0: s0.reduce_add(),
        s1: s1.reduce_add(),
        s2: s2.reduce_add(),
        t0: t0.reduce_add(),
        t1: t1.reduce_add(),
    };

    while i < n {
        let wd = weights[i] * d[i];
        m.s0 += weights[i];
        m.s1 += wd;
        m.s2 += wd * d[i];
        m.t0 += weights[i] * y[i];
        m.t1 += wd * y[i];
        i += 1;
    }

    m
}

// ============================================================================
// Solver Trait
// ============================================================================

/// Trait for type-specific accumulation of local moments.
pub trait MomentSolver: Float {
    /// Accumulate the weighted moments of a centred window.
    #[inline]
    fn accumulate_moments(d: &[Self], y: &[Self], weights: &[Self]) -> LocalMoments<Self> {
        accumulate_moments_scalar(d, y, weights)
    }
}

impl MomentSolver for f64 {
    #[inline]
    fn accumulate_moments(d: &[f64], y: &[f64], weights: &[f64]) -> LocalMoments<f64> {
        accumulate_moments_simd_f64(d, y, weights)
    }
}

impl MomentSolver for f32 {
    #[inline]
    fn accumulate_moments(d: &[f32], y: &[f32], weights: &[f32]) -> LocalMoments<f32> {
        accumulate_moments_simd_f32(d, y, weights)
    }
}

// ============================================================================
// Regression Context
// ============================================================================

/// Context containing all data needed to fit a single output location.
pub struct RegressionContext<'a, T: Float> {
    /// Sorted locations.
    pub x: &'a [T],

    /// Responses aligned with `x`.
    pub y: &'a [T],

    /// Observation weights aligned with `x`.
    pub w: &'a [T],

    /// Output location.
    pub location: T,

    /// Bandwidth.
    pub bandwidth: T,

    /// Weight function (kernel).
    pub weight_function: WeightFunction,

    /// Scratch space for window weights and centred locations.
    pub buffer: &'a mut SmoothBuffer<T>,
}

impl<'a, T: MomentSolver> RegressionContext<'a, T> {
    /// Perform the local linear fit at `self.location`.
    pub fn fit(&mut self) -> Result<T, LocalFitFailure<T>> {
        let x0 = self.location;
        let h = self.bandwidth;

        // Unbounded kernels weight the whole sample
        let window = match self.weight_function.support_radius() {
            Some(r) => Window::around(self.x, x0, T::from(r).unwrap_or_else(T::one) * h),
            None => Window::full(self.x.len()),
        };
        let xs = &self.x[window.left..window.right];
        let ys = &self.y[window.left..window.right];
        let ws = &self.w[window.left..window.right];

        self.buffer.prepare(window.len());

        // Count distinct locations carrying weight (xs is sorted)
        let mut support = 0usize;
        let mut last: Option<T> = None;
        for (j, (&xj, &wj)) in xs.iter().zip(ws).enumerate() {
            let d = xj - x0;
            let weight = wj * self.weight_function.compute_weight(d / h);
            self.buffer.centered[j] = d;
            self.buffer.weights[j] = weight;
            if weight > T::zero() && last != Some(xj) {
                support += 1;
                last = Some(xj);
            }
        }

        let failure = LocalFitFailure {
            location: x0,
            support,
        };
        if support < 2 {
            return Err(failure);
        }

        T::accumulate_moments(&self.buffer.centered, ys, &self.buffer.weights)
            .intercept()
            .ok_or(failure)
    }
}

// ============================================================================
// Smoothing Pass
// ============================================================================

/// Fit every output location in order, stopping at the first failure.
pub fn smooth_pass_sorted<T: MomentSolver>(
    samples: &SortedSamples<T>,
    grid: &[T],
    bandwidth: T,
    weight_function: WeightFunction,
) -> Result<Vec<T>, LocalFitFailure<T>> {
    let mut buffer = SmoothBuffer::with_capacity(samples.len());
    grid.iter()
        .map(|&location| {
            RegressionContext {
                x: &samples.x,
                y: &samples.y,
                w: &samples.w,
                location,
                bandwidth,
                weight_function,
                buffer: &mut buffer,
            }
            .fit()
        })
        .collect()
}

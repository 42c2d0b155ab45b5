//! Parallel execution engine for local linear smoothing.
//!
//! ## Purpose
//!
//! This module provides the parallel smoothing pass that is injected into
//! the `crosscov` executor. Output locations are fitted independently, so
//! they are distributed across CPU cores.
//!
//! ## Design notes
//!
//! * **Implementation**: Drop-in replacement for the sequential smoothing pass.
//! * **Parallelism**: Uses `rayon` for data-parallel execution across CPU cores.
//! * **Optimization**: Reuses one scratch buffer per worker via `map_init`.
//! * **Determinism**: Every location runs the same fitting code as the
//!   sequential pass; the first failure in grid order is reported.
//!
//! ## Invariants
//!
//! * Input samples are sorted by location.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not select the bandwidth.

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// Export dependencies from crosscov crate
#[cfg(feature = "cpu")]
use crosscov::internals::algorithms::regression::{
    LocalFitFailure, MomentSolver, RegressionContext,
};
#[cfg(feature = "cpu")]
use crosscov::internals::math::kernel::WeightFunction;
#[cfg(feature = "cpu")]
use crosscov::internals::primitives::buffer::SmoothBuffer;
#[cfg(feature = "cpu")]
use crosscov::internals::primitives::sorting::SortedSamples;

// ============================================================================
// Parallel Smoothing Function
// ============================================================================

/// Fit every output location in parallel.
#[cfg(feature = "cpu")]
pub fn smooth_pass_parallel<T>(
    samples: &SortedSamples<T>,
    grid: &[T],
    bandwidth: T,
    weight_function: WeightFunction,
) -> Result<Vec<T>, LocalFitFailure<T>>
where
    T: MomentSolver + Send + Sync,
{
    let fits: Vec<Result<T, LocalFitFailure<T>>> = grid
        .par_iter()
        .map_init(SmoothBuffer::default, |buffer, &location| {
            RegressionContext {
                x: &samples.x,
                y: &samples.y,
                w: &samples.w,
                location,
                bandwidth,
                weight_function,
                buffer,
            }
            .fit()
        })
        .collect();

    // Sequential collect keeps the first failure in grid order
    fits.into_iter().collect()
}

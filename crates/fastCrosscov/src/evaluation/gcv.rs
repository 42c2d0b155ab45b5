//! Parallel GCV scoring for bandwidth selection.
//!
//! ## Purpose
//!
//! This module scores the candidate bandwidth schedule concurrently. Each
//! candidate runs a full sequential smoothing pass on its own worker.
//!
//! ## Design notes
//!
//! * **Parallelism**: Uses `rayon` to evaluate candidates in parallel.
//! * **Integration**: Plugs into the `crosscov` executor via the `GcvPassFn` hook.
//! * **Logging**: Per-candidate scores are logged by `score_candidate`.
//! * **Consistency**: Scores come from the same `score_candidate` used by
//!   the sequential path, and selection stays in `crosscov`, so ties break
//!   identically.
//!
//! ## Non-goals
//!
//! * This module does not derive the candidate schedule or pick the winner.

// Feature-gated imports
#[cfg(feature = "cpu")]
use log::debug;
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// Export dependencies from crosscov crate
#[cfg(feature = "cpu")]
use crosscov::internals::algorithms::regression::{smooth_pass_sorted, MomentSolver};
#[cfg(feature = "cpu")]
use crosscov::internals::engine::executor::CrossCovConfig;
#[cfg(feature = "cpu")]
use crosscov::internals::evaluation::gcv::score_candidate;
#[cfg(feature = "cpu")]
use crosscov::internals::primitives::sorting::SortedSamples;

/// Score every candidate bandwidth in parallel.
#[cfg(feature = "cpu")]
pub fn gcv_pass_parallel<T>(
    raw: &SortedSamples<T>,
    grid: &[T],
    candidates: &[T],
    config: &CrossCovConfig<T>,
) -> Vec<T>
where
    T: MomentSolver + Send + Sync,
{
    debug!(
        "Scoring {} GCV candidates on {} threads",
        candidates.len(),
        rayon::current_num_threads()
    );

    let weight_function = config.weight_function;
    candidates
        .par_iter()
        .map(|&h| {
            let fit = smooth_pass_sorted(raw, grid, h, weight_function);
            score_candidate(raw, grid, h, weight_function, fit)
        })
        .collect()
}

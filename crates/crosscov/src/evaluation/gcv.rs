//! Generalized cross-validation for bandwidth selection.
//!
//! ## Purpose
//!
//! This module selects the smoothing bandwidth for raw cross-covariance
//! samples when none is supplied. A geometric schedule of candidates is
//! derived from the spacing of the raw locations, each candidate is scored
//! by a GCV criterion, and the minimizer is kept.
//!
//! ## Design notes
//!
//! * **Schedule**: The smallest candidate is 1.5 times the widest span
//!   covered by three consecutive distinct locations, so every local fit at
//!   that bandwidth sees at least two distinct points.
//! * **Failures**: A candidate whose smoothing pass fails, or whose score is
//!   not finite, scores `+inf` and stays in the result.
//! * **Ties**: Exactly equal scores resolve to the larger bandwidth.
//! * **Callbacks**: Smoothing is injected, so parallel scoring produces the
//!   same scores and selection as the sequential path.
//!
//! ## Key concepts
//!
//! * **GCV score**: `RSS / (1 - r * k0 / (N * h))^2` with `r` the range of raw
//!   locations, `N` the number of raw samples, and `k0` the Gaussian density at 0.
//! * **Residuals**: Raw values minus the smoothed curve interpolated at the
//!   raw locations (constant extrapolation).
//!
//! ## Invariants
//!
//! * Candidates are strictly positive and strictly increasing.
//! * `scores.len() == candidates.len()`.
//!
//! ## Non-goals
//!
//! * This module does not perform the smoothing itself.
//! * Leave-one-out or k-fold cross-validation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use log::{debug, warn};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::interpolation::interpolate_sorted_batch;
use crate::algorithms::regression::LocalFitFailure;
use crate::math::kernel::WeightFunction;
use crate::primitives::errors::CrossCovError;
use crate::primitives::sorting::{distinct_sorted, SortedSamples};

// ============================================================================
// Constants
// ============================================================================

/// Number of candidate bandwidths.
pub const GCV_CANDIDATES: usize = 20;

/// Multiplier applied to the neighbour span to obtain the first candidate.
pub const START_FACTOR: f64 = 1.5;

/// Minimum number of distinct raw locations.
pub const MIN_DISTINCT_LOCATIONS: usize = 3;

// ============================================================================
// Candidate Schedule
// ============================================================================

/// Widest span `u[i + 2] - u[i]` over sorted distinct locations.
pub fn min_neighbor_bandwidth<T: Float>(distinct: &[T]) -> Result<T, CrossCovError> {
    if distinct.len() < MIN_DISTINCT_LOCATIONS {
        return Err(CrossCovError::InsufficientSupport {
            got: distinct.len(),
            min: MIN_DISTINCT_LOCATIONS,
        });
    }

    Ok(distinct
        .windows(3)
        .map(|w| w[2] - w[0])
        .fold(T::zero(), T::max))
}

/// Geometric bandwidth schedule for sorted raw locations.
///
/// ```text
/// h0 = 1.5 * max(u[i+2] - u[i])
/// q  = (range / (4 * h0))^(1/9), or 2^(1/9) when that is not above 1
/// candidates = h0 * q^k, k = 0..20
/// ```
pub fn bandwidth_candidates<T: Float>(sorted_t: &[T]) -> Result<Vec<T>, CrossCovError> {
    let distinct = distinct_sorted(sorted_t);
    let span = min_neighbor_bandwidth(&distinct)?;

    let h0 = T::from(START_FACTOR).unwrap_or_else(T::one) * span;
    let range = distinct[distinct.len() - 1] - distinct[0];

    let four = T::from(4.0).unwrap_or_else(T::one);
    let ninth = T::from(1.0 / 9.0).unwrap_or_else(T::one);
    let mut q = (range / (four * h0)).powf(ninth);
    if q.is_nan() || q <= T::one() {
        // Range narrower than 4 * h0
        q = T::from(2.0).unwrap_or_else(T::one).powf(ninth);
    }

    let mut candidates = Vec::with_capacity(GCV_CANDIDATES);
    let mut h = h0;
    for _ in 0..GCV_CANDIDATES {
        candidates.push(h);
        h = h * q;
    }
    Ok(candidates)
}

// ============================================================================
// Scoring
// ============================================================================

/// GCV score of a smoothed curve against sorted raw samples.
///
/// Returns `+inf` when any smoothed value or the score itself is not finite.
pub fn gcv_score<T: Float>(
    raw: &SortedSamples<T>,
    grid: &[T],
    smoothed: &[T],
    bandwidth: T,
    k0: T,
) -> T {
    if smoothed.iter().any(|v| !v.is_finite()) {
        return T::infinity();
    }

    let mut fitted = Vec::with_capacity(raw.len());
    fitted.resize(raw.len(), T::zero());
    interpolate_sorted_batch(grid, smoothed, &raw.x, &mut fitted);

    let rss = raw
        .y
        .iter()
        .zip(&fitted)
        .fold(T::zero(), |acc, (&r, &f)| acc + (r - f) * (r - f));

    let n = T::from(raw.len()).unwrap_or_else(T::one);
    let correction = T::one() - raw.range() * k0 / (n * bandwidth);
    let score = rss / (correction * correction);

    if score.is_finite() {
        score
    } else {
        T::infinity()
    }
}

/// Score one candidate from the outcome of its smoothing pass.
pub fn score_candidate<T: Float>(
    raw: &SortedSamples<T>,
    grid: &[T],
    bandwidth: T,
    weight_function: WeightFunction,
    fit: Result<Vec<T>, LocalFitFailure<T>>,
) -> T {
    let k0 = T::from(weight_function.density_at_zero()).unwrap_or_else(T::one);
    let score = match fit {
        Ok(smoothed) => gcv_score(raw, grid, &smoothed, bandwidth, k0),
        Err(failure) => {
            warn!(
                "GCV candidate h={:?} failed at t={:?} ({} distinct points in window)",
                bandwidth.to_f64(),
                failure.location.to_f64(),
                failure.support
            );
            T::infinity()
        }
    };

    debug!(
        "GCV candidate h={:?} score={:?}",
        bandwidth.to_f64(),
        score.to_f64()
    );
    score
}

/// Score every candidate sequentially.
pub fn score_candidates<T, F>(
    raw: &SortedSamples<T>,
    grid: &[T],
    candidates: &[T],
    weight_function: WeightFunction,
    mut smoother: F,
) -> Vec<T>
where
    T: Float,
    F: FnMut(T) -> Result<Vec<T>, LocalFitFailure<T>>,
{
    candidates
        .iter()
        .map(|&h| score_candidate(raw, grid, h, weight_function, smoother(h)))
        .collect()
}

// ============================================================================
// Selection
// ============================================================================

/// Index of the minimum score, resolving exact ties to the larger bandwidth.
pub fn select_bandwidth<T: Float>(candidates: &[T], scores: &[T]) -> Result<usize, CrossCovError> {
    let mut best: Option<usize> = None;
    for (i, (&h, &s)) in candidates.iter().zip(scores).enumerate() {
        if !s.is_finite() {
            continue;
        }
        best = match best {
            Some(b) if s > scores[b] || (s == scores[b] && h <= candidates[b]) => Some(b),
            _ => Some(i),
        };
    }

    best.ok_or(CrossCovError::AllCandidatesFailed {
        candidates: candidates.len(),
    })
}

/// Outcome of GCV bandwidth selection.
#[derive(Debug, Clone, PartialEq)]
pub struct GcvSelection<T> {
    /// Selected bandwidth.
    pub bandwidth: T,

    /// Curve re-smoothed at the selected bandwidth.
    pub smoothed: Vec<T>,

    /// GCV score of the selected bandwidth.
    pub score: T,

    /// Full candidate schedule.
    pub candidates: Vec<T>,

    /// Score of every candidate (`+inf` for failures).
    pub scores: Vec<T>,
}

impl<T: Float> GcvSelection<T> {
    /// Run the full selection: schedule, scoring, argmin, and final smoothing.
    ///
    /// `score_pass` maps the candidate schedule to scores; `smoother` smooths
    /// at one bandwidth.
    pub fn run<P, S>(
        raw: &SortedSamples<T>,
        weight_function: WeightFunction,
        score_pass: P,
        mut smoother: S,
    ) -> Result<Self, CrossCovError>
    where
        P: FnOnce(&[T]) -> Vec<T>,
        S: FnMut(T) -> Result<Vec<T>, LocalFitFailure<T>>,
    {
        if !weight_function.supports_gcv() {
            return Err(CrossCovError::UnsupportedKernel {
                kernel: weight_function.name(),
            });
        }

        let candidates = bandwidth_candidates(&raw.x)?;
        let scores = score_pass(&candidates);
        let best = select_bandwidth(&candidates, &scores)?;
        let bandwidth = candidates[best];

        debug!(
            "GCV selected h={:?} (candidate {} of {})",
            bandwidth.to_f64(),
            best + 1,
            candidates.len()
        );

        let smoothed = smoother(bandwidth).map_err(|f| f.into_error(bandwidth))?;

        Ok(Self {
            bandwidth,
            smoothed,
            score: scores[best],
            candidates,
            scores,
        })
    }
}

//! Execution engine for cross-covariance estimation.
//!
//! ## Purpose
//!
//! This module provides the executor that runs one estimation end to end:
//! parameter and input checks, the dense shortcut, raw covariance
//! construction, and either a fixed-bandwidth smoothing pass or GCV
//! bandwidth selection followed by a final pass.
//!
//! ## Design notes
//!
//! * Checks run in a fixed order so that kernel and cardinality errors are
//!   raised before any raw-sample work.
//! * Smoothing and candidate scoring go through replaceable function
//!   pointers; extension crates install parallel versions.
//! * Bandwidth selection (argmin and tie-break) always runs here, so
//!   sequential and parallel scoring select identically.
//!
//! ## Invariants
//!
//! * Raw samples are sorted by location before any smoothing pass.
//! * The output grid is strictly increasing.
//!
//! ## Non-goals
//!
//! * This module does not estimate the mean function.
//! * This module does not handle parallel execution directly (handled by extension crates).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::Debug;
use log::debug;

// Internal dependencies
use crate::algorithms::interpolation::GridFunction;
use crate::algorithms::raw_covariance::{
    covariate_mean, raw_dense, raw_sparse, RawCovariance, RawCrossCov,
};
use crate::algorithms::regression::{smooth_pass_sorted, LocalFitFailure, MomentSolver};
use crate::engine::output::CrossCovResult;
use crate::engine::validator::Validator;
use crate::evaluation::gcv::{score_candidates, GcvSelection};
use crate::math::kernel::WeightFunction;
use crate::primitives::errors::CrossCovError;
use crate::primitives::samples::{SubjectSample, SubjectSamples};
use crate::primitives::sorting::{sort_samples, sorted_unique, SortedSamples};

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for custom smooth pass function
#[doc(hidden)]
pub type SmoothPassFn<T> = fn(
    &SortedSamples<T>, // raw samples sorted by location
    &[T],              // output grid
    T,                 // bandwidth
    WeightFunction,    // weight_function
) -> Result<Vec<T>, LocalFitFailure<T>>;

/// Signature for custom GCV scoring pass function
#[doc(hidden)]
pub type GcvPassFn<T> = fn(
    &SortedSamples<T>,   // raw samples sorted by location
    &[T],                // output grid
    &[T],                // candidate bandwidths
    &CrossCovConfig<T>,  // config for internal fits
) -> Vec<T>; // scores

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for cross-covariance estimation.
#[derive(Debug, Clone)]
pub struct CrossCovConfig<T> {
    /// Smoothing bandwidth. If `None`, the bandwidth is selected by GCV.
    pub bandwidth: Option<T>,

    /// Kernel weight function used for local regression.
    pub weight_function: WeightFunction,

    /// Covariate mean. If `None`, the average of the finite covariates is used.
    pub covariate_mean: Option<T>,

    /// Explicit output grid. If `None`, the union of observed times is used.
    pub support: Option<Vec<T>>,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom smooth pass function (enables parallel execution).
    #[doc(hidden)]
    pub custom_smooth_pass: Option<SmoothPassFn<T>>,

    /// Custom GCV scoring pass function.
    #[doc(hidden)]
    pub custom_gcv_pass: Option<GcvPassFn<T>>,
}

impl<T> Default for CrossCovConfig<T> {
    fn default() -> Self {
        Self {
            bandwidth: None,
            weight_function: WeightFunction::default(),
            covariate_mean: None,
            support: None,
            custom_smooth_pass: None,
            custom_gcv_pass: None,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Unified executor for cross-covariance estimation.
#[derive(Debug, Clone)]
pub struct CrossCovExecutor<T> {
    config: CrossCovConfig<T>,
}

impl<T> CrossCovExecutor<T> {
    /// Create an executor from a configuration.
    pub fn from_config(config: CrossCovConfig<T>) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &CrossCovConfig<T> {
        &self.config
    }
}

impl<T: MomentSolver + Debug> CrossCovExecutor<T> {
    // ========================================================================
    // Main Entry Point
    // ========================================================================

    /// Run one estimation.
    ///
    /// `mean` is required unless the samples take the dense shortcut (dense
    /// matrix, no column grid, no support grid, no mean).
    pub fn run(
        &self,
        samples: &SubjectSamples<T>,
        covariates: &[T],
        mean: Option<&GridFunction<T>>,
    ) -> Result<CrossCovResult<T>, CrossCovError> {
        let cfg = &self.config;

        // Parameters first, before touching the data
        Validator::validate_kernel_selection(cfg.bandwidth, cfg.weight_function)?;
        if let Some(h) = cfg.bandwidth {
            Validator::validate_bandwidth(h)?;
        }
        Validator::validate_cardinality(samples.n_subjects(), covariates.len())?;

        if let SubjectSamples::Dense(dense) = samples {
            if mean.is_none() && dense.grid().is_none() && cfg.support.is_none() {
                debug!(
                    "dense design: {} subjects x {} columns, no smoothing",
                    dense.n_subjects(),
                    dense.n_points()
                );
                return Ok(CrossCovResult {
                    smoothed: None,
                    raw: RawCrossCov::Dense(raw_dense(dense, covariates)),
                    bandwidth: cfg.bandwidth,
                    score: None,
                    candidates: None,
                    gcv_scores: None,
                    covariate_mean: None,
                });
            }
        }

        let mean = mean.ok_or(CrossCovError::MissingRequiredInput("mean reference"))?;

        let converted;
        let subjects: &[SubjectSample<T>] = match samples {
            SubjectSamples::Sparse(subjects) => subjects,
            SubjectSamples::Dense(dense) => {
                converted = dense.to_subjects()?;
                &converted
            }
        };

        let z_bar = covariate_mean(covariates, cfg.covariate_mean)?;
        let raw = raw_sparse(subjects, covariates, mean, z_bar)?;
        let grid = self.output_grid(subjects)?;

        debug!(
            "sparse design: {} subjects, {} raw samples, {} grid points",
            subjects.len(),
            raw.len(),
            grid.len()
        );

        self.smooth_raw(raw, grid, z_bar)
    }

    // ========================================================================
    // Smoothing
    // ========================================================================

    // Smooth sorted raw samples at one bandwidth through the configured pass.
    fn smooth(
        &self,
        sorted: &SortedSamples<T>,
        grid: &[T],
        bandwidth: T,
    ) -> Result<Vec<T>, LocalFitFailure<T>> {
        let pass: SmoothPassFn<T> = match self.config.custom_smooth_pass {
            Some(pass) => pass,
            None => smooth_pass_sorted,
        };
        pass(sorted, grid, bandwidth, self.config.weight_function)
    }

    // Fixed-bandwidth smoothing or GCV selection, then assemble the result.
    fn smooth_raw(
        &self,
        raw: RawCovariance<T>,
        grid: Vec<T>,
        z_bar: T,
    ) -> Result<CrossCovResult<T>, CrossCovError> {
        let cfg = &self.config;
        let sorted = sort_samples(&raw.t, &raw.values, None);

        let (bandwidth, values, score, candidates, gcv_scores) = match cfg.bandwidth {
            Some(h) => {
                let values = self
                    .smooth(&sorted, &grid, h)
                    .map_err(|failure| failure.into_error(h))?;
                (h, values, None, None, None)
            }
            None => {
                let selection = GcvSelection::run(
                    &sorted,
                    cfg.weight_function,
                    |candidates| match cfg.custom_gcv_pass {
                        Some(pass) => pass(&sorted, &grid, candidates, cfg),
                        None => score_candidates(
                            &sorted,
                            &grid,
                            candidates,
                            cfg.weight_function,
                            |h| self.smooth(&sorted, &grid, h),
                        ),
                    },
                    |h| self.smooth(&sorted, &grid, h),
                )?;
                (
                    selection.bandwidth,
                    selection.smoothed,
                    Some(selection.score),
                    Some(selection.candidates),
                    Some(selection.scores),
                )
            }
        };

        Ok(CrossCovResult {
            smoothed: Some(GridFunction::from_parts(grid, values)),
            raw: RawCrossCov::Sparse(raw),
            bandwidth: Some(bandwidth),
            score,
            candidates,
            gcv_scores,
            covariate_mean: Some(z_bar),
        })
    }

    // ========================================================================
    // Output Grid
    // ========================================================================

    // Explicit support (sorted, de-duplicated) or the union of observed times.
    fn output_grid(&self, subjects: &[SubjectSample<T>]) -> Result<Vec<T>, CrossCovError> {
        match &self.config.support {
            Some(support) => {
                Validator::validate_support(support)?;
                Ok(sorted_unique(support))
            }
            None => {
                let times: Vec<T> = subjects.iter().flat_map(|s| s.t.iter().copied()).collect();
                Ok(sorted_unique(&times))
            }
        }
    }
}

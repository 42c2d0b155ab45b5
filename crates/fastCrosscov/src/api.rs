//! High-level API for cross-covariance estimation with parallel execution.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point of `fastCrosscov`. It
//! wraps the `crosscov` builder, installs the parallel smoothing and GCV
//! passes, and accepts `ndarray` inputs.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `crosscov` builder pattern.
//! * **Parallel-First**: Parallel execution is on by default.
//! * **Feature-Gated**: Parallelism requires the `cpu` feature.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ParallelCrossCovBuilder`] via `CrossCov::new()`.
//! 2. Chain configuration methods (`.bandwidth()`, `.parallel()`, etc.).
//! 3. Call `.build()`, then `.fit(...)` or `.fit_dense(...)`.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::smooth_pass_parallel;
#[cfg(feature = "cpu")]
use crate::evaluation::gcv::gcv_pass_parallel;

// External dependencies
use num_traits::Float;
use std::fmt::Debug;

// Internal dependencies
use crate::input::{CovariateInput, DenseInput};

// Export dependencies from crosscov crate
use crosscov::internals::algorithms::regression::MomentSolver;
use crosscov::internals::api::{CrossCovBuilder, CrossCovEstimator};

// Publicly re-exported types
pub use crosscov::internals::algorithms::interpolation::GridFunction;
pub use crosscov::internals::algorithms::raw_covariance::{RawCovariance, RawCrossCov};
pub use crosscov::internals::api::smooth_local_linear;
pub use crosscov::internals::engine::output::CrossCovResult;
pub use crosscov::internals::math::kernel::WeightFunction;
pub use crosscov::internals::primitives::errors::CrossCovError;
pub use crosscov::internals::primitives::samples::{DenseSamples, SubjectSample, SubjectSamples};

// ============================================================================
// Builder
// ============================================================================

/// Builder for cross-covariance estimation with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelCrossCovBuilder<T> {
    /// Base builder from the crosscov crate.
    pub base: CrossCovBuilder<T>,

    /// Parallel execution hint (defaults to `true`).
    pub parallel: Option<bool>,
}

impl<T: Float> Default for ParallelCrossCovBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ParallelCrossCovBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base: CrossCovBuilder::new(),
            parallel: None,
        }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.base.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    /// Set the smoothing bandwidth. Omit to select it by GCV.
    pub fn bandwidth(mut self, bandwidth: T) -> Self {
        self.base = self.base.bandwidth(bandwidth);
        self
    }

    /// Set the kernel weight function.
    pub fn weight_function(mut self, wf: WeightFunction) -> Self {
        self.base = self.base.weight_function(wf);
        self
    }

    /// Set the kernel by name (`"gauss"`, `"epan"`, `"rect"`, `"quar"`, ...).
    pub fn kernel_name(mut self, name: &str) -> Self {
        self.base = self.base.kernel_name(name);
        self
    }

    /// Set the covariate mean used to centre the covariate.
    pub fn covariate_mean(mut self, mean: T) -> Self {
        self.base = self.base.covariate_mean(mean);
        self
    }

    /// Set an explicit output grid.
    pub fn support(mut self, grid: Vec<T>) -> Self {
        self.base = self.base.support(grid);
        self
    }
}

impl<T: MomentSolver + Debug + Send + Sync> ParallelCrossCovBuilder<T> {
    /// Validate the configuration and create an estimator.
    pub fn build(self) -> Result<ParallelCrossCovEstimator<T>, CrossCovError> {
        let parallel = self.parallel.unwrap_or(true);

        #[cfg(feature = "cpu")]
        let base = if parallel {
            self.base
                .custom_smooth_pass(smooth_pass_parallel)
                .custom_gcv_pass(gcv_pass_parallel)
        } else {
            self.base
        };

        #[cfg(not(feature = "cpu"))]
        let base = self.base;

        Ok(ParallelCrossCovEstimator {
            base: base.build()?,
            parallel,
        })
    }
}

// ============================================================================
// Estimator
// ============================================================================

/// A validated cross-covariance estimator with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelCrossCovEstimator<T> {
    base: CrossCovEstimator<T>,
    parallel: bool,
}

impl<T: MomentSolver + Debug> ParallelCrossCovEstimator<T> {
    /// Estimate from subject samples and any covariate container.
    pub fn fit<C>(
        &self,
        samples: &SubjectSamples<T>,
        covariates: &C,
        mean: Option<&GridFunction<T>>,
    ) -> Result<CrossCovResult<T>, CrossCovError>
    where
        C: CovariateInput<T> + ?Sized,
    {
        self.base.fit(samples, covariates.as_covariate_slice()?, mean)
    }

    /// Estimate from a subjects x grid-points matrix (e.g. `ndarray::Array2`).
    ///
    /// With a `grid`, rows are treated as curves observed at those times and
    /// smoothed (a `mean` is then required). Without one, the column-wise
    /// sample covariances are returned.
    pub fn fit_dense<D, C>(
        &self,
        samples: &D,
        grid: Option<&[T]>,
        covariates: &C,
        mean: Option<&GridFunction<T>>,
    ) -> Result<CrossCovResult<T>, CrossCovError>
    where
        D: DenseInput<T> + ?Sized,
        C: CovariateInput<T> + ?Sized,
    {
        let mut dense = samples.to_dense_samples()?;
        if let Some(grid) = grid {
            dense = dense.with_grid(grid.to_vec())?;
        }
        self.fit(&SubjectSamples::Dense(dense), covariates, mean)
    }

    /// Whether the parallel passes are installed.
    pub fn is_parallel(&self) -> bool {
        self.parallel && cfg!(feature = "cpu")
    }
}

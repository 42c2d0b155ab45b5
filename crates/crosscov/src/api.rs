//! High-level API for cross-covariance estimation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring the smoother and bandwidth selection, and
//! the estimator it produces.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated once, when `.build()` is called.
//! * **Deferred errors**: Duplicate parameters and unparseable kernel names
//!   are recorded during configuration and reported by `.build()`.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`CrossCovBuilder`] via `CrossCov::new()`.
//! 2. Chain configuration methods (`.bandwidth()`, `.weight_function()`, etc.).
//! 3. Call `.build()` to obtain a [`CrossCovEstimator`], then `.fit(...)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::Debug;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::regression::{smooth_pass_sorted, MomentSolver};
use crate::engine::executor::{CrossCovExecutor, GcvPassFn, SmoothPassFn};
use crate::engine::validator::Validator;
use crate::primitives::sorting::sort_samples;

// Publicly re-exported types
pub use crate::algorithms::interpolation::GridFunction;
pub use crate::algorithms::raw_covariance::{RawCovariance, RawCrossCov};
pub use crate::engine::executor::CrossCovConfig;
pub use crate::engine::output::CrossCovResult;
pub use crate::math::kernel::WeightFunction;
pub use crate::primitives::errors::CrossCovError;
pub use crate::primitives::samples::{DenseSamples, SubjectSample, SubjectSamples};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring cross-covariance estimation.
#[derive(Debug, Clone)]
pub struct CrossCovBuilder<T> {
    /// Smoothing bandwidth; `None` selects it by GCV.
    pub bandwidth: Option<T>,

    /// Kernel weight function.
    pub weight_function: Option<WeightFunction>,

    /// Covariate mean; `None` averages the finite covariates.
    pub covariate_mean: Option<T>,

    /// Explicit output grid.
    pub support: Option<Vec<T>>,

    /// Deferred error from kernel name parsing.
    pub(crate) deferred_error: Option<CrossCovError>,

    // ======================================
    // DEV
    // ======================================
    /// Custom smooth pass function.
    #[doc(hidden)]
    pub custom_smooth_pass: Option<SmoothPassFn<T>>,

    /// Custom GCV scoring pass function.
    #[doc(hidden)]
    pub custom_gcv_pass: Option<GcvPassFn<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for CrossCovBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> CrossCovBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            bandwidth: None,
            weight_function: None,
            covariate_mean: None,
            support: None,
            deferred_error: None,
            custom_smooth_pass: None,
            custom_gcv_pass: None,
            duplicate_param: None,
        }
    }

    /// Set the smoothing bandwidth. Omit to select it by GCV.
    pub fn bandwidth(mut self, bandwidth: T) -> Self {
        if self.bandwidth.is_some() {
            self.duplicate_param = Some("bandwidth");
        }
        self.bandwidth = Some(bandwidth);
        self
    }

    /// Set the kernel weight function.
    pub fn weight_function(mut self, wf: WeightFunction) -> Self {
        if self.weight_function.is_some() {
            self.duplicate_param = Some("weight_function");
        }
        self.weight_function = Some(wf);
        self
    }

    /// Set the kernel by name (`"gauss"`, `"epan"`, `"rect"`, `"quar"`, ...).
    pub fn kernel_name(mut self, name: &str) -> Self {
        if self.weight_function.is_some() {
            self.duplicate_param = Some("weight_function");
        }
        match name.parse::<WeightFunction>() {
            Ok(wf) => self.weight_function = Some(wf),
            Err(e) => {
                self.deferred_error.get_or_insert(e);
            }
        }
        self
    }

    /// Set the covariate mean used to centre the covariate.
    pub fn covariate_mean(mut self, mean: T) -> Self {
        if self.covariate_mean.is_some() {
            self.duplicate_param = Some("covariate_mean");
        }
        self.covariate_mean = Some(mean);
        self
    }

    /// Set an explicit output grid (sorted and de-duplicated on use).
    pub fn support(mut self, grid: Vec<T>) -> Self {
        if self.support.is_some() {
            self.duplicate_param = Some("support");
        }
        self.support = Some(grid);
        self
    }

    // ==========================
    // Development Options
    // ==========================

    /// Set a custom smooth pass function for execution (only for dev)
    #[doc(hidden)]
    pub fn custom_smooth_pass(mut self, pass: SmoothPassFn<T>) -> Self {
        self.custom_smooth_pass = Some(pass);
        self
    }

    /// Set a custom GCV scoring pass function (only for dev)
    #[doc(hidden)]
    pub fn custom_gcv_pass(mut self, pass: GcvPassFn<T>) -> Self {
        self.custom_gcv_pass = Some(pass);
        self
    }

    // ==========================
    // Build
    // ==========================

    /// Validate the configuration and create an estimator.
    pub fn build(self) -> Result<CrossCovEstimator<T>, CrossCovError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        let weight_function = self.weight_function.unwrap_or_default();
        Validator::validate_kernel_selection(self.bandwidth, weight_function)?;
        if let Some(h) = self.bandwidth {
            Validator::validate_bandwidth(h)?;
        }
        if let Some(m) = self.covariate_mean {
            Validator::validate_scalar(m, "covariate_mean")?;
        }
        if let Some(grid) = &self.support {
            Validator::validate_support(grid)?;
        }

        Ok(CrossCovEstimator {
            executor: CrossCovExecutor::from_config(CrossCovConfig {
                bandwidth: self.bandwidth,
                weight_function,
                covariate_mean: self.covariate_mean,
                support: self.support,
                custom_smooth_pass: self.custom_smooth_pass,
                custom_gcv_pass: self.custom_gcv_pass,
            }),
        })
    }
}

// ============================================================================
// Estimator
// ============================================================================

/// A validated cross-covariance estimator.
#[derive(Debug, Clone)]
pub struct CrossCovEstimator<T> {
    executor: CrossCovExecutor<T>,
}

impl<T: MomentSolver + Debug> CrossCovEstimator<T> {
    /// Estimate the cross-covariance between subject curves and a covariate.
    ///
    /// `covariates[i]` belongs to subject `i`. `mean` is the mean function of
    /// the curves; it is required unless `samples` is a dense matrix without
    /// a column grid and no output grid was configured.
    pub fn fit(
        &self,
        samples: &SubjectSamples<T>,
        covariates: &[T],
        mean: Option<&GridFunction<T>>,
    ) -> Result<CrossCovResult<T>, CrossCovError> {
        self.executor.run(samples, covariates, mean)
    }
}

impl<T> CrossCovEstimator<T> {
    /// The validated configuration.
    pub fn config(&self) -> &CrossCovConfig<T> {
        self.executor.config()
    }
}

// ============================================================================
// Direct Smoother
// ============================================================================

/// Local linear kernel smoother evaluated at arbitrary output locations.
///
/// `weights` defaults to unit weights. Any local fit failure is fatal here.
pub fn smooth_local_linear<T: MomentSolver>(
    x: &[T],
    y: &[T],
    weights: Option<&[T]>,
    locations: &[T],
    bandwidth: T,
    weight_function: WeightFunction,
) -> Result<Vec<T>, CrossCovError> {
    Validator::validate_smoother_inputs(x, y, weights, locations)?;
    Validator::validate_bandwidth(bandwidth)?;

    let sorted = sort_samples(x, y, weights);
    smooth_pass_sorted(&sorted, locations, bandwidth, weight_function)
        .map_err(|failure| failure.into_error(bandwidth))
}

//! Input validation for cross-covariance configuration and data.
//!
//! ## Purpose
//!
//! This module checks configuration parameters and input data before any
//! computation starts: bandwidth bounds, kernel compatibility, covariate
//! cardinality, and the shape and finiteness of smoother inputs.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * Per-subject checks live with the raw covariance builder, which already
//!   visits every observation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::kernel::WeightFunction;
use crate::primitives::errors::CrossCovError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for cross-covariance configuration and input data.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a supplied bandwidth.
    pub fn validate_bandwidth<T: Float>(bandwidth: T) -> Result<(), CrossCovError> {
        if !bandwidth.is_finite() || bandwidth <= T::zero() {
            return Err(CrossCovError::InvalidBandwidth(
                bandwidth.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Automatic selection is only defined for the Gaussian kernel.
    pub fn validate_kernel_selection<T>(
        bandwidth: Option<T>,
        weight_function: WeightFunction,
    ) -> Result<(), CrossCovError> {
        if bandwidth.is_none() && !weight_function.supports_gcv() {
            return Err(CrossCovError::UnsupportedKernel {
                kernel: weight_function.name(),
            });
        }
        Ok(())
    }

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), CrossCovError> {
        if !val.is_finite() {
            return Err(CrossCovError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Input Validation
    // ========================================================================

    /// One covariate value per subject.
    pub fn validate_cardinality(subjects: usize, covariates: usize) -> Result<(), CrossCovError> {
        if subjects != covariates {
            return Err(CrossCovError::InputCardinality {
                subjects,
                covariates,
            });
        }
        Ok(())
    }

    /// Validate scattered smoother input and output locations.
    pub fn validate_smoother_inputs<T: Float>(
        x: &[T],
        y: &[T],
        weights: Option<&[T]>,
        locations: &[T],
    ) -> Result<(), CrossCovError> {
        // Check 1: Non-empty
        if x.is_empty() || locations.is_empty() {
            return Err(CrossCovError::EmptyInput);
        }

        // Check 2: Matching lengths
        let n = x.len();
        if y.len() != n || weights.is_some_and(|w| w.len() != n) {
            return Err(CrossCovError::InvalidInput(format!(
                "x has {} values, y has {}, weights have {}",
                n,
                y.len(),
                weights.map_or(n, <[T]>::len)
            )));
        }

        // Check 3: Finite values
        for i in 0..n {
            if !x[i].is_finite() {
                return Err(CrossCovError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    x[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !y[i].is_finite() {
                return Err(CrossCovError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    y[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        // Check 4: Finite, non-negative weights
        if let Some(w) = weights {
            if let Some(i) = w.iter().position(|&v| !v.is_finite() || v < T::zero()) {
                return Err(CrossCovError::InvalidNumericValue(format!(
                    "weights[{}]={}",
                    i,
                    w[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        // Check 5: Finite output locations
        if let Some(i) = locations.iter().position(|v| !v.is_finite()) {
            return Err(CrossCovError::InvalidNumericValue(format!(
                "location[{}]={}",
                i,
                locations[i].to_f64().unwrap_or(f64::NAN)
            )));
        }

        Ok(())
    }

    /// An explicit output grid must be non-empty and finite.
    pub fn validate_support<T: Float>(grid: &[T]) -> Result<(), CrossCovError> {
        if grid.is_empty() {
            return Err(CrossCovError::InvalidInput(
                "support grid must not be empty".into(),
            ));
        }
        if let Some(i) = grid.iter().position(|v| !v.is_finite()) {
            return Err(CrossCovError::InvalidNumericValue(format!(
                "support[{}]={}",
                i,
                grid[i].to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Surface the first parameter that was set more than once.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), CrossCovError> {
        if let Some(parameter) = duplicate_param {
            return Err(CrossCovError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}

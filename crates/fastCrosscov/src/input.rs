//! Input abstractions for cross-covariance estimation.
//!
//! ## Purpose
//!
//! This module lets `fit` accept covariates and dense sample matrices in
//! several formats (slices, vectors, ndarray) through two small traits.
//!
//! ## Design notes
//!
//! * **Zero-copy where possible**: Covariates are borrowed as slices.
//! * **Interoperability**: Bridges standard Rust collections with `ndarray`.
//! * **Fail-fast validation**: Non-contiguous 1-D arrays are rejected.
//!
//! ## Invariants
//!
//! * Dense matrices are read in logical row-major order (one row per subject).
//!
//! ## Non-goals
//!
//! * This module does not perform data cleaning or imputation.

// External dependencies
use ndarray::{ArrayBase, Data, Ix1, Ix2};
use num_traits::Float;

// Export dependencies from crosscov crate
use crosscov::internals::primitives::errors::CrossCovError;
use crosscov::internals::primitives::samples::DenseSamples;

// ============================================================================
// Covariates
// ============================================================================

/// Trait for types that can supply one covariate value per subject.
pub trait CovariateInput<T: Float> {
    /// Convert the input to a contiguous slice.
    fn as_covariate_slice(&self) -> Result<&[T], CrossCovError>;
}

impl<T: Float> CovariateInput<T> for [T] {
    fn as_covariate_slice(&self) -> Result<&[T], CrossCovError> {
        Ok(self)
    }
}

impl<T: Float> CovariateInput<T> for Vec<T> {
    fn as_covariate_slice(&self) -> Result<&[T], CrossCovError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, S> CovariateInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_covariate_slice(&self) -> Result<&[T], CrossCovError> {
        self.as_slice().ok_or_else(|| {
            CrossCovError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}

// ============================================================================
// Dense Samples
// ============================================================================

/// Trait for types that can be read as a subjects x grid-points matrix.
pub trait DenseInput<T: Float> {
    /// Copy the input into row-major dense samples.
    fn to_dense_samples(&self) -> Result<DenseSamples<T>, CrossCovError>;
}

impl<T: Float> DenseInput<T> for DenseSamples<T> {
    fn to_dense_samples(&self) -> Result<DenseSamples<T>, CrossCovError> {
        Ok(self.clone())
    }
}

impl<T: Float> DenseInput<T> for [Vec<T>] {
    fn to_dense_samples(&self) -> Result<DenseSamples<T>, CrossCovError> {
        DenseSamples::from_rows(self)
    }
}

impl<T: Float, S> DenseInput<T> for ArrayBase<S, Ix2>
where
    S: Data<Elem = T>,
{
    fn to_dense_samples(&self) -> Result<DenseSamples<T>, CrossCovError> {
        let (n_subjects, n_points) = self.dim();
        DenseSamples::new(self.iter().copied().collect(), n_subjects, n_points)
    }
}

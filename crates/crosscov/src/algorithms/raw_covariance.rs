//! Raw cross-covariance samples.
//!
//! ## Purpose
//!
//! This module turns subject observations and a scalar covariate into the
//! raw material the smoother works on. In the sparse design each observation
//! contributes one product `(y - mu(t)) * (z - z_bar)` at its own time. In the
//! dense design every grid column yields a pairwise-complete sample
//! covariance with the covariate directly.
//!
//! ## Key concepts
//!
//! * **Covariate mean**: Either supplied by the caller or the average of the
//!   finite covariate values.
//! * **Missing covariates**: A subject whose covariate is not finite
//!   contributes nothing.
//! * **Ordering**: Sparse samples are emitted in subject order, then in the
//!   subject's own time order. Duplicated times are preserved.
//!
//! ## Non-goals
//!
//! * This module does not estimate the mean function.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::interpolation::GridFunction;
use crate::math::moments::{finite_mean, pairwise_covariance};
use crate::primitives::errors::CrossCovError;
use crate::primitives::samples::{DenseSamples, SubjectSample};

// ============================================================================
// Data Structures
// ============================================================================

/// Raw cross-covariance products from a sparse design.
#[derive(Debug, Clone, PartialEq)]
pub struct RawCovariance<T> {
    /// Observation time of each product.
    pub t: Vec<T>,

    /// Raw product `(y - mu(t)) * (z - z_bar)`.
    pub values: Vec<T>,

    /// Index of the contributing subject.
    pub subjects: Vec<usize>,
}

impl<T: Float> RawCovariance<T> {
    /// Number of raw samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.t.len()
    }

    /// Whether there are no raw samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }
}

/// Raw cross-covariance in either design.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCrossCov<T> {
    /// Per-observation products (sparse design).
    Sparse(RawCovariance<T>),

    /// One pairwise-complete covariance per grid column (dense design).
    Dense(Vec<T>),
}

impl<T> RawCrossCov<T> {
    /// The sparse products, if any.
    pub fn as_sparse(&self) -> Option<&RawCovariance<T>> {
        match self {
            Self::Sparse(raw) => Some(raw),
            Self::Dense(_) => None,
        }
    }

    /// The per-column covariances, if any.
    pub fn as_dense(&self) -> Option<&[T]> {
        match self {
            Self::Sparse(_) => None,
            Self::Dense(values) => Some(values),
        }
    }
}

// ============================================================================
// Covariate Mean
// ============================================================================

/// Resolve the covariate mean: the supplied value, or the finite average.
pub fn covariate_mean<T: Float>(covariates: &[T], supplied: Option<T>) -> Result<T, CrossCovError> {
    match supplied {
        Some(m) if m.is_finite() => Ok(m),
        Some(_) => Err(CrossCovError::InvalidNumericValue(
            "covariate mean must be finite".into(),
        )),
        None => finite_mean(covariates).ok_or_else(|| {
            CrossCovError::InvalidInput("no finite covariate value to average".into())
        }),
    }
}

// ============================================================================
// Sparse Design
// ============================================================================

/// Build the raw products for every observation of every subject.
///
/// `covariates` must be index-aligned with `subjects`.
pub fn raw_sparse<T: Float>(
    subjects: &[SubjectSample<T>],
    covariates: &[T],
    mean: &GridFunction<T>,
    z_bar: T,
) -> Result<RawCovariance<T>, CrossCovError> {
    let capacity = subjects.iter().map(|s| s.t.len()).sum();
    let mut raw = RawCovariance {
        t: Vec::with_capacity(capacity),
        values: Vec::with_capacity(capacity),
        subjects: Vec::with_capacity(capacity),
    };

    for (i, (subject, &z)) in subjects.iter().zip(covariates).enumerate() {
        if subject.t.len() != subject.y.len() {
            return Err(CrossCovError::MismatchedInputs {
                subject: i,
                times: subject.t.len(),
                values: subject.y.len(),
            });
        }
        if let Some(j) = subject.t.iter().position(|v| !v.is_finite()) {
            return Err(CrossCovError::InvalidNumericValue(format!(
                "subject {i}: time at index {j} is not finite"
            )));
        }
        if let Some(j) = subject.y.iter().position(|v| !v.is_finite()) {
            return Err(CrossCovError::InvalidNumericValue(format!(
                "subject {i}: value at index {j} is not finite"
            )));
        }

        if !z.is_finite() {
            continue;
        }

        let dz = z - z_bar;
        for (&t, &y) in subject.t.iter().zip(&subject.y) {
            raw.t.push(t);
            raw.values.push((y - mean.evaluate(t)) * dz);
            raw.subjects.push(i);
        }
    }

    if raw.is_empty() {
        return Err(CrossCovError::EmptyInput);
    }

    Ok(raw)
}

// ============================================================================
// Dense Design
// ============================================================================

/// Pairwise-complete sample covariance of every column with the covariate.
///
/// Columns with fewer than two complete pairs yield NaN.
pub fn raw_dense<T: Float>(samples: &DenseSamples<T>, covariates: &[T]) -> Vec<T> {
    (0..samples.n_points())
        .map(|j| {
            pairwise_covariance(
                (0..samples.n_subjects()).map(|i| (samples.get(i, j), covariates[i])),
            )
        })
        .collect()
}

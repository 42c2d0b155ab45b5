//! # fastCrosscov — Parallel cross-covariance estimation
//!
//! Multi-threaded front-end for the [`crosscov`] estimator. The numerical
//! work is identical; `fastCrosscov` distributes the local fits of a
//! smoothing pass and the GCV candidate scores across CPU cores with
//! `rayon`, and accepts `ndarray` inputs.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastCrosscov::prelude::*;
//! use ndarray::{array, Array1};
//!
//! // 4 subjects observed on a common grid of 3 time points
//! let curves = array![
//!     [1.0, 2.0, 3.0],
//!     [2.0, 2.5, 3.5],
//!     [0.5, 1.0, 2.0],
//!     [1.5, 2.5, 2.5],
//! ];
//! let covariates = Array1::from_vec(vec![0.3, 1.2, -0.8, 0.1]);
//!
//! let model: ParallelCrossCovEstimator<f64> = CrossCov::new()
//!     .parallel(true)     // Default
//!     .build()?;
//!
//! // No grid: column-wise sample covariances
//! let result = model.fit_dense(&curves, None, &covariates, None)?;
//! assert_eq!(result.raw.as_dense().map(|v| v.len()), Some(3));
//! # Result::<(), CrossCovError>::Ok(())
//! ```
//!
//! ```rust
//! use fastCrosscov::prelude::*;
//! use ndarray::array;
//!
//! let curves = array![
//!     [1.0, 2.0, 3.0, 3.5],
//!     [2.0, 2.5, 3.5, 4.0],
//!     [0.5, 1.0, 2.0, 2.0],
//! ];
//! let covariates = vec![0.5, 1.5, -1.0];
//! let grid = vec![0.0, 0.25, 0.5, 1.0];
//! let mean = GridFunction::new(vec![0.0, 1.0], vec![1.0, 3.0])?;
//!
//! // With a grid and a mean: smoothed, bandwidth selected by GCV
//! let result = CrossCov::new()
//!     .build()?
//!     .fit_dense(&curves, Some(grid.as_slice()), &covariates, Some(&mean))?;
//! assert!(result.smoothed.is_some());
//! # Result::<(), CrossCovError>::Ok(())
//! ```
//!
//! ## Features
//!
//! - `cpu` (default): rayon-parallel smoothing and GCV scoring. Without it,
//!   the estimator runs the sequential `crosscov` passes.

#![allow(non_snake_case)]

// Layer 4: Evaluation - parallel GCV scoring.
mod evaluation;

// Layer 5: Engine - parallel smoothing pass.
mod engine;

// High-level fluent API.
mod api;

// Input data handling.
mod input;

// Standard fastCrosscov prelude.
pub mod prelude {
    pub use crate::api::{
        smooth_local_linear, CrossCovError, CrossCovResult, DenseSamples, GridFunction,
        ParallelCrossCovBuilder as CrossCov, ParallelCrossCovEstimator, RawCovariance,
        RawCrossCov, SubjectSample, SubjectSamples, WeightFunction,
        WeightFunction::{Biweight, Cosine, Epanechnikov, Gaussian, Triangle, Tricube, Uniform},
    };
    pub use crate::input::{CovariateInput, DenseInput};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}

//! # crosscov — Cross-covariance between functional data and a scalar covariate
//!
//! Estimates the cross-covariance function `C(t) = Cov(Y(t), Z)` between a
//! sample of curves `Y_i(t)` and one scalar covariate `Z_i` per subject.
//! Curves may be observed sparsely (each subject on its own irregular time
//! points) or densely (all subjects on one common grid).
//!
//! ## How it works
//!
//! 1. **Raw covariance**: Every observation contributes the product
//!    `(Y_i(t) - mu(t)) * (Z_i - Z_bar)`, where `mu` is a caller-supplied mean
//!    function and `Z_bar` the covariate mean.
//! 2. **Smoothing**: The raw products are smoothed with a local linear kernel
//!    smoother onto an output grid.
//! 3. **Bandwidth selection**: Without a supplied bandwidth, the bandwidth is
//!    chosen by generalized cross-validation over a geometric schedule of 20
//!    candidates (Gaussian kernel only).
//!
//! Dense matrices without any time information take a shortcut: each column's
//! pairwise-complete sample covariance with the covariate, with no smoothing.
//!
//! ## Quick Start
//!
//! ### Sparse design, fixed bandwidth
//!
//! ```rust
//! use crosscov::prelude::*;
//!
//! let samples = SubjectSamples::Sparse(vec![
//!     SubjectSample::new(vec![0.0, 0.5, 1.0], vec![1.2, 1.9, 2.4]),
//!     SubjectSample::new(vec![0.2, 0.7], vec![0.4, 0.9]),
//!     SubjectSample::new(vec![0.1, 0.6, 0.9], vec![2.1, 2.8, 3.3]),
//! ]);
//! let covariates = vec![1.0, -1.0, 2.0];
//! let mean = GridFunction::new(vec![0.0, 1.0], vec![1.0, 2.0])?;
//!
//! let model = CrossCov::new()
//!     .bandwidth(0.3)               // Omit to select by GCV
//!     .weight_function(Gaussian)    // Or .kernel_name("gauss")
//!     .build()?;
//!
//! let result = model.fit(&samples, &covariates, Some(&mean))?;
//!
//! assert_eq!(result.bandwidth, Some(0.3));
//! println!("{}", result);
//! # Result::<(), CrossCovError>::Ok(())
//! ```
//!
//! ### Dense design, no time information
//!
//! ```rust
//! use crosscov::prelude::*;
//!
//! // 3 subjects x 2 columns, row-major
//! let dense = DenseSamples::new(vec![1.0, 2.0, 2.0, 4.0, 3.0, 6.0], 3, 2)?;
//! let covariates = vec![1.0, 2.0, 3.0];
//!
//! let result = CrossCov::new()
//!     .build()?
//!     .fit(&SubjectSamples::Dense(dense), &covariates, None)?;
//!
//! assert!(result.smoothed.is_none());
//! assert_eq!(result.raw.as_dense(), Some(&[1.0, 2.0][..]));
//! # Result::<(), CrossCovError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! `fit` returns `Result<CrossCovResult<T>, CrossCovError>`. Configuration
//! errors (duplicate parameters, unknown kernel names, automatic selection
//! with a non-Gaussian kernel) are reported by `build()`; data errors
//! (cardinality, missing mean, non-finite values) by `fit()`.
//!
//! ## Minimal Usage (no_std)
//!
//! The crate supports `no_std` environments with `alloc`:
//!
//! ```toml
//! [dependencies]
//! crosscov = { version = "0.3", default-features = false }
//! ```
//!
//! ## Logging
//!
//! Progress is reported through the `log` facade (`debug!` per GCV candidate,
//! `warn!` for failed candidates). No logger is installed by the crate.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - raw covariance, smoothing, interpolation.
mod algorithms;

// Layer 4: Evaluation - bandwidth selection.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
mod engine;

// High-level fluent API for cross-covariance estimation.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        smooth_local_linear, CrossCovBuilder as CrossCov, CrossCovConfig, CrossCovError,
        CrossCovEstimator, CrossCovResult, DenseSamples, GridFunction, RawCovariance,
        RawCrossCov, SubjectSample, SubjectSamples, WeightFunction,
        WeightFunction::Biweight,
        WeightFunction::Cosine,
        WeightFunction::Epanechnikov,
        WeightFunction::Gaussian,
        WeightFunction::Triangle,
        WeightFunction::Tricube,
        WeightFunction::Uniform,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
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

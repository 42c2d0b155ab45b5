//! Layer 3: Algorithms
//!
//! This layer implements the raw cross-covariance construction, the local
//! linear smoother, and grid interpolation. It contains the numerical core
//! of the estimator but is orchestrated by the engine layer.

// Raw cross-covariance samples (sparse products, dense column covariances).
pub mod raw_covariance;

// Local linear regression and smoothing passes.
pub mod regression;

// Piecewise-linear grid functions.
pub mod interpolation;

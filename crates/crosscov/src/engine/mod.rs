//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates an estimation by coordinating validation, raw
//! covariance construction, smoothing, and bandwidth selection. It owns the
//! path dispatch (dense shortcut versus sparse smoothing) and the injection
//! points used by the parallel extension crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Unified execution engine for cross-covariance estimation.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for cross-covariance estimation.
pub mod output;

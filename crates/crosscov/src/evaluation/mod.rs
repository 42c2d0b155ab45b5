//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer scores smoothing results to drive parameter selection:
//! - Generalized cross-validation over a geometric bandwidth schedule
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Generalized cross-validation for bandwidth selection.
pub mod gcv;

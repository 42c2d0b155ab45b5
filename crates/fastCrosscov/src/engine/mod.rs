//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer provides the parallel smoothing pass injected into the
//! `crosscov` executor.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//! ```

/// Parallel execution engine.
pub mod executor;

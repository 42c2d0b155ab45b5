//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer provides parallel GCV candidate scoring.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//! ```

/// Parallel GCV scoring.
pub mod gcv;

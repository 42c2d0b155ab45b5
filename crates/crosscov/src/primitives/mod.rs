//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data containers, error type, and ordering helpers
//! used throughout the crate. It has zero internal dependencies within the
//! crate apart from the shared error type.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Ordering utilities.
pub mod sorting;

/// Subject sample containers.
pub mod samples;

/// Shared error types.
pub mod errors;

/// Scratch buffers.
pub mod buffer;

/// Windowing over sorted locations.
pub mod window;

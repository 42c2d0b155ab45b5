//! Error types for cross-covariance estimation.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while building raw
//! cross-covariance samples, smoothing them, or selecting a bandwidth.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (counts, locations, bandwidths).
//! * **Deferred**: Builder misuse is recorded during configuration and raised at `build()`.
//! * **No-std**: Uses `alloc` for dynamic messages when `std` is disabled.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Validation errors**: Cardinality, missing inputs, non-finite values. Always fatal.
//! 2. **Kernel errors**: Unknown kernel names, or automatic selection with a non-Gaussian kernel.
//! 3. **Numerical errors**: Degenerate local fits and exhausted bandwidth schedules.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not decide which failures are recoverable.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for cross-covariance estimation.
#[derive(Debug, Clone, PartialEq)]
pub enum CrossCovError {
    /// No usable observations were supplied.
    EmptyInput,

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// The number of covariate values differs from the number of subjects.
    InputCardinality {
        /// Number of subjects in the sample set.
        subjects: usize,
        /// Number of covariate values.
        covariates: usize,
    },

    /// A subject's time and amplitude sequences have different lengths.
    MismatchedInputs {
        /// Index of the offending subject.
        subject: usize,
        /// Number of time points.
        times: usize,
        /// Number of amplitude values.
        values: usize,
    },

    /// An input required on the selected path was not supplied.
    MissingRequiredInput(&'static str),

    /// Input data contains NaN or infinite values where finite values are required.
    InvalidNumericValue(String),

    /// Bandwidth must be positive and finite.
    InvalidBandwidth(f64),

    /// Kernel name could not be parsed.
    UnknownKernel(String),

    /// Automatic bandwidth selection is only defined for the Gaussian kernel.
    UnsupportedKernel {
        /// Name of the requested kernel.
        kernel: &'static str,
    },

    /// Too few distinct raw locations to derive a bandwidth schedule.
    InsufficientSupport {
        /// Number of distinct locations found.
        got: usize,
        /// Minimum required.
        min: usize,
    },

    /// The local linear design at an output location was degenerate.
    LocalFitFailure {
        /// Output location where the fit failed.
        location: f64,
        /// Bandwidth in use.
        bandwidth: f64,
        /// Number of distinct input locations carrying positive weight.
        support: usize,
    },

    /// Every candidate bandwidth failed or scored +infinity.
    AllCandidatesFailed {
        /// Number of candidates evaluated.
        candidates: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for CrossCovError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "No usable observations"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::InputCardinality {
                subjects,
                covariates,
            } => write!(
                f,
                "Cardinality mismatch: {subjects} subjects but {covariates} covariate values"
            ),
            Self::MismatchedInputs {
                subject,
                times,
                values,
            } => write!(
                f,
                "Length mismatch in subject {subject}: {times} time points, {values} values"
            ),
            Self::MissingRequiredInput(what) => write!(f, "Missing required input: {what}"),
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidBandwidth(bw) => {
                write!(f, "Invalid bandwidth: {bw} (must be > 0 and finite)")
            }
            Self::UnknownKernel(name) => write!(f, "Unknown kernel: '{name}'"),
            Self::UnsupportedKernel { kernel } => write!(
                f,
                "Automatic bandwidth selection requires the Gaussian kernel, got {kernel}"
            ),
            Self::InsufficientSupport { got, min } => write!(
                f,
                "Too few distinct locations: got {got}, need at least {min}"
            ),
            Self::LocalFitFailure {
                location,
                bandwidth,
                support,
            } => write!(
                f,
                "Local linear fit failed at {location} (bandwidth {bandwidth}, {support} distinct points in window)"
            ),
            Self::AllCandidatesFailed { candidates } => write!(
                f,
                "All {candidates} candidate bandwidths failed; try supplying a bandwidth"
            ),
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
            ),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for CrossCovError {}

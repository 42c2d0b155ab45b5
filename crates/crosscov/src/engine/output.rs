//! Output types for cross-covariance estimation.
//!
//! ## Purpose
//!
//! This module defines [`CrossCovResult`], which bundles the smoothed curve,
//! the raw cross-covariance it was built from, the bandwidth in effect, and
//! the GCV diagnostics when a bandwidth was selected.
//!
//! ## Design notes
//!
//! * **Optional outputs**: Path-dependent fields use `Option`.
//! * **Ergonomics**: Implements `Display` for a human-readable summary.
//!
//! ## Invariants
//!
//! * `smoothed` is `None` exactly when `raw` is `RawCrossCov::Dense`.
//! * `candidates` and `gcv_scores` are both present or both absent, with equal lengths.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::interpolation::GridFunction;
use crate::algorithms::raw_covariance::RawCrossCov;

// ============================================================================
// Result Structure
// ============================================================================

/// Cross-covariance estimate with its raw material and diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossCovResult<T> {
    /// Smoothed cross-covariance on the output grid (sparse path only).
    pub smoothed: Option<GridFunction<T>>,

    /// Raw cross-covariance samples.
    pub raw: RawCrossCov<T>,

    /// Bandwidth used: supplied or selected. `None` only on the dense path
    /// when no bandwidth was supplied.
    pub bandwidth: Option<T>,

    /// GCV score of the selected bandwidth (automatic selection only).
    pub score: Option<T>,

    /// Candidate bandwidth schedule (automatic selection only).
    pub candidates: Option<Vec<T>>,

    /// GCV score of every candidate (automatic selection only).
    pub gcv_scores: Option<Vec<T>>,

    /// Covariate mean used to centre the sparse products.
    pub covariate_mean: Option<T>,
}

impl<T: Float> CrossCovResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Check if a smoothed curve was produced.
    pub fn is_smoothed(&self) -> bool {
        self.smoothed.is_some()
    }

    /// Check if the bandwidth was chosen by GCV.
    pub fn has_gcv_scores(&self) -> bool {
        self.gcv_scores.is_some()
    }

    /// Output grid of the smoothed curve.
    pub fn grid(&self) -> Option<&[T]> {
        self.smoothed.as_ref().map(GridFunction::grid)
    }

    /// Smoothed values on the output grid.
    pub fn values(&self) -> Option<&[T]> {
        self.smoothed.as_ref().map(GridFunction::values)
    }

    /// Evaluate the smoothed curve at `t` (constant outside the grid).
    pub fn evaluate(&self, t: T) -> Option<T> {
        self.smoothed.as_ref().map(|s| s.evaluate(t))
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for CrossCovResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        match &self.raw {
            RawCrossCov::Sparse(raw) => {
                writeln!(f, "  Design:       sparse")?;
                writeln!(f, "  Raw samples:  {}", raw.len())?;
            }
            RawCrossCov::Dense(values) => {
                writeln!(f, "  Design:       dense")?;
                writeln!(f, "  Grid columns: {}", values.len())?;
            }
        }
        if let Some(m) = self.covariate_mean {
            writeln!(f, "  Covariate mean: {}", m)?;
        }
        match self.bandwidth {
            Some(h) if self.has_gcv_scores() => writeln!(f, "  Bandwidth:    {} (GCV)", h)?,
            Some(h) => writeln!(f, "  Bandwidth:    {}", h)?,
            None => writeln!(f, "  Bandwidth:    none")?,
        }
        if let Some(score) = self.score {
            writeln!(f, "  GCV score:    {}", score)?;
        }
        writeln!(f)?;

        let values = match (&self.smoothed, &self.raw) {
            (Some(s), _) => {
                writeln!(f, "Smoothed Cross-Covariance:")?;
                writeln!(f, "{:>8} {:>12}", "T", "Value")?;
                s.values()
            }
            (None, RawCrossCov::Dense(values)) => {
                writeln!(f, "Column Covariances:")?;
                writeln!(f, "{:>8} {:>12}", "Column", "Value")?;
                values.as_slice()
            }
            (None, RawCrossCov::Sparse(_)) => return Ok(()),
        };
        writeln!(f, "{:-<21}", "")?;

        // Show first 10 and last 10 if more than 20 rows
        let n = values.len();
        let rows_to_show: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            match &self.smoothed {
                Some(s) => writeln!(f, "{:>8.2} {:>12.6}", s.grid()[idx], values[idx])?,
                None => writeln!(f, "{:>8} {:>12.6}", idx, values[idx])?,
            }
        }

        Ok(())
    }
}

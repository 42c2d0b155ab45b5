//! Subject sample containers.
//!
//! ## Purpose
//!
//! Functional observations arrive in one of two shapes: ragged per-subject
//! sequences observed on their own irregular time points (sparse design), or
//! a rectangular matrix where every subject shares one grid (dense design).
//! [`SubjectSamples`] tags the two shapes so the estimator branches on the
//! variant instead of inspecting types at runtime.
//!
//! ## Invariants
//!
//! * `DenseSamples::values.len() == n_subjects * n_points` (row-major).
//! * A dense column grid, when present, has exactly `n_points` entries.
//! * Non-finite dense cells mean "not observed".

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::CrossCovError;

// ============================================================================
// Sparse Subject
// ============================================================================

/// One subject's irregularly spaced observations.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectSample<T> {
    /// Observation times.
    pub t: Vec<T>,

    /// Observed amplitudes, aligned with `t`.
    pub y: Vec<T>,
}

impl<T: Float> SubjectSample<T> {
    /// Pair observation times with amplitudes.
    pub fn new(t: Vec<T>, y: Vec<T>) -> Self {
        Self { t, y }
    }

    /// Number of observations.
    #[inline]
    pub fn len(&self) -> usize {
        self.t.len()
    }

    /// Whether the subject has no observations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }
}

// ============================================================================
// Dense Matrix
// ============================================================================

/// Subjects observed on a common grid, stored row-major (one row per subject).
#[derive(Debug, Clone, PartialEq)]
pub struct DenseSamples<T> {
    values: Vec<T>,
    n_subjects: usize,
    n_points: usize,
    grid: Option<Vec<T>>,
}

impl<T: Float> DenseSamples<T> {
    /// Wrap a row-major `n_subjects x n_points` buffer.
    pub fn new(values: Vec<T>, n_subjects: usize, n_points: usize) -> Result<Self, CrossCovError> {
        if values.len() != n_subjects * n_points {
            return Err(CrossCovError::InvalidInput(format!(
                "dense buffer has {} cells, expected {} x {}",
                values.len(),
                n_subjects,
                n_points
            )));
        }
        Ok(Self {
            values,
            n_subjects,
            n_points,
            grid: None,
        })
    }

    /// Build from one row per subject; all rows must share a length.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, CrossCovError> {
        let n_points = rows.first().map_or(0, |r| r.len());
        let mut values = Vec::with_capacity(rows.len() * n_points);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_points {
                return Err(CrossCovError::InvalidInput(format!(
                    "row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    n_points
                )));
            }
            values.extend_from_slice(row);
        }
        Self::new(values, rows.len(), n_points)
    }

    /// Attach the shared column grid (observation times of each column).
    pub fn with_grid(mut self, grid: Vec<T>) -> Result<Self, CrossCovError> {
        if grid.len() != self.n_points {
            return Err(CrossCovError::InvalidInput(format!(
                "grid has {} points, matrix has {} columns",
                grid.len(),
                self.n_points
            )));
        }
        self.grid = Some(grid);
        Ok(self)
    }

    /// Number of subjects (rows).
    #[inline]
    pub fn n_subjects(&self) -> usize {
        self.n_subjects
    }

    /// Number of grid columns.
    #[inline]
    pub fn n_points(&self) -> usize {
        self.n_points
    }

    /// Shared column grid, if attached.
    #[inline]
    pub fn grid(&self) -> Option<&[T]> {
        self.grid.as_deref()
    }

    /// Row of subject `i`.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        let start = i * self.n_points;
        &self.values[start..start + self.n_points]
    }

    /// Cell `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        self.values[i * self.n_points + j]
    }

    /// Convert rows into sparse subjects on the attached grid, dropping
    /// unobserved (non-finite) cells.
    pub fn to_subjects(&self) -> Result<Vec<SubjectSample<T>>, CrossCovError> {
        let grid = self
            .grid
            .as_ref()
            .ok_or(CrossCovError::MissingRequiredInput("time grid"))?;

        Ok((0..self.n_subjects)
            .map(|i| {
                let (t, y): (Vec<T>, Vec<T>) = grid
                    .iter()
                    .zip(self.row(i))
                    .filter(|(_, v)| v.is_finite())
                    .map(|(&t, &v)| (t, v))
                    .unzip();
                SubjectSample { t, y }
            })
            .collect())
    }
}

// ============================================================================
// Tagged Input
// ============================================================================

/// Subject observations in either sparse or dense layout.
#[derive(Debug, Clone, PartialEq)]
pub enum SubjectSamples<T> {
    /// Ragged per-subject sequences.
    Sparse(Vec<SubjectSample<T>>),

    /// Common-grid matrix, one row per subject.
    Dense(DenseSamples<T>),
}

impl<T: Float> SubjectSamples<T> {
    /// Number of subjects.
    pub fn n_subjects(&self) -> usize {
        match self {
            Self::Sparse(subjects) => subjects.len(),
            Self::Dense(dense) => dense.n_subjects(),
        }
    }

    /// Whether the samples carry any time information.
    pub fn has_time_grid(&self) -> bool {
        match self {
            Self::Sparse(_) => true,
            Self::Dense(dense) => dense.grid().is_some(),
        }
    }
}

impl<T> From<Vec<SubjectSample<T>>> for SubjectSamples<T> {
    fn from(subjects: Vec<SubjectSample<T>>) -> Self {
        Self::Sparse(subjects)
    }
}

impl<T> From<DenseSamples<T>> for SubjectSamples<T> {
    fn from(dense: DenseSamples<T>) -> Self {
        Self::Dense(dense)
    }
}

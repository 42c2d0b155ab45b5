//! Kernel (weight) functions for local linear smoothing.
//!
//! ## Purpose
//!
//! This module provides the kernels that turn a scaled distance
//! `u = (x - x0) / h` into a local regression weight, together with the
//! metadata the smoother and the bandwidth selector need: the support
//! radius and the density value at zero.
//!
//! ## Design notes
//!
//! * **Unnormalized weights**: `compute_weight` returns the kernel shape only.
//!   The local linear intercept is invariant to a constant weight factor, so
//!   normalization is carried separately through [`WeightFunction::integrator`].
//! * **Unbounded Gaussian**: The Gaussian has no support radius; its weight
//!   only reaches zero through floating-point underflow.
//! * **Names**: Kernels parse from the short names common in functional data
//!   toolkits (`"gauss"`, `"epan"`, `"rect"`, `"quar"`) as well as full names.
//!
//! ## Invariants
//!
//! * Kernels are non-negative and symmetric.
//! * Bounded kernels return exactly zero for `|u| >= 1`.
//!
//! ## Non-goals
//!
//! * This module does not choose bandwidths.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;

// External dependencies
use core::f64::consts::PI;
use core::str::FromStr;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::CrossCovError;

// ============================================================================
// Mathematical Constants
// ============================================================================

/// Square root of 2*pi.
const SQRT_2PI: f64 = 2.506_628_274_631_000_5_f64;

/// pi/2, used by the cosine kernel.
const PI_OVER_2: f64 = PI / 2.0;

// ============================================================================
// Weight Function Enum
// ============================================================================

/// Weight function (kernel) for local linear smoothing.
///
/// | Kernel       | Shape K(u)          | Integral c_K   |
/// |--------------|---------------------|----------------|
/// | Gaussian     | exp(-u^2 / 2)       | sqrt(2 pi)     |
/// | Epanechnikov | 1 - u^2             | 4/3            |
/// | Biweight     | (1 - u^2)^2         | 16/15          |
/// | Triangle     | 1 - abs(u)          | 1              |
/// | Tricube      | (1 - abs(u)^3)^3    | 81/70          |
/// | Uniform      | 1                   | 2              |
/// | Cosine       | cos(pi u / 2)       | 4/pi           |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightFunction {
    /// Gaussian kernel. The only kernel supported by automatic bandwidth selection.
    #[default]
    Gaussian,

    /// Epanechnikov kernel: K(u) = 1 - u^2 for |u| < 1.
    Epanechnikov,

    /// Biweight (quartic) kernel: K(u) = (1 - u^2)^2 for |u| < 1.
    Biweight,

    /// Triangular kernel: K(u) = 1 - |u| for |u| < 1.
    Triangle,

    /// Tricube kernel: K(u) = (1 - |u|^3)^3 for |u| < 1.
    Tricube,

    /// Uniform (rectangular) kernel: K(u) = 1 for |u| < 1.
    Uniform,

    /// Cosine kernel: K(u) = cos(pi * u / 2) for |u| < 1.
    Cosine,
}

impl WeightFunction {
    // ========================================================================
    // Metadata Methods
    // ========================================================================

    /// Get the name of the weight function.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            WeightFunction::Gaussian => "Gaussian",
            WeightFunction::Epanechnikov => "Epanechnikov",
            WeightFunction::Biweight => "Biweight",
            WeightFunction::Triangle => "Triangle",
            WeightFunction::Tricube => "Tricube",
            WeightFunction::Uniform => "Uniform",
            WeightFunction::Cosine => "Cosine",
        }
    }

    /// Kernel integral c_K = integral K(u) du.
    #[inline]
    pub const fn integrator(&self) -> f64 {
        match self {
            WeightFunction::Gaussian => SQRT_2PI,
            WeightFunction::Epanechnikov => 4.0 / 3.0,
            WeightFunction::Biweight => 16.0 / 15.0,
            WeightFunction::Triangle => 1.0,
            WeightFunction::Tricube => 81.0 / 70.0,
            WeightFunction::Uniform => 2.0,
            WeightFunction::Cosine => 4.0 / PI,
        }
    }

    /// Value of the normalized kernel density at zero, K(0) / c_K.
    ///
    /// For the Gaussian this is 1/sqrt(2 pi) ~ 0.398942, the constant of the
    /// GCV effective-bandwidth correction.
    #[inline]
    pub fn density_at_zero(&self) -> f64 {
        1.0 / self.integrator()
    }

    /// Whether automatic (GCV) bandwidth selection is defined for this kernel.
    #[inline]
    pub const fn supports_gcv(&self) -> bool {
        matches!(self, WeightFunction::Gaussian)
    }

    // ========================================================================
    // Support Methods
    // ========================================================================

    /// Returns the support interval for bounded kernels.
    #[inline]
    pub fn support(&self) -> Option<(f64, f64)> {
        match self {
            WeightFunction::Gaussian => None,
            _ => Some((-1.0, 1.0)),
        }
    }

    /// Scaled radius outside of which the weight is zero, or `None` when
    /// every location carries weight.
    #[inline]
    pub fn support_radius(&self) -> Option<f64> {
        self.support().map(|(_, hi)| hi)
    }

    // ========================================================================
    // Weight Computation
    // ========================================================================

    /// Compute the unnormalized weight K(u) for a scaled distance.
    #[inline]
    pub fn compute_weight<T: Float>(&self, u: T) -> T {
        let abs_u = u.abs();
        if self.support().is_some() && abs_u >= T::one() {
            return T::zero();
        }

        match self {
            WeightFunction::Gaussian => {
                let half = T::from(0.5).unwrap_or_else(T::zero);
                (-half * abs_u * abs_u).exp()
            }

            WeightFunction::Epanechnikov => T::one() - abs_u * abs_u,

            WeightFunction::Biweight => {
                let tmp = T::one() - abs_u * abs_u;
                tmp * tmp
            }

            WeightFunction::Triangle => T::one() - abs_u,

            WeightFunction::Tricube => {
                let tmp = T::one() - abs_u * abs_u * abs_u;
                tmp * tmp * tmp
            }

            WeightFunction::Uniform => T::one(),

            WeightFunction::Cosine => {
                let pi_over_2 = T::from(PI_OVER_2).unwrap_or_else(T::one);
                (pi_over_2 * abs_u).cos()
            }
        }
    }
}

// ============================================================================
// Name Parsing
// ============================================================================

impl FromStr for WeightFunction {
    type Err = CrossCovError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kernel = match s.trim() {
            "gauss" | "gaussian" | "Gaussian" => WeightFunction::Gaussian,
            "epan" | "epanechnikov" | "Epanechnikov" => WeightFunction::Epanechnikov,
            "quar" | "biweight" | "quartic" | "Biweight" => WeightFunction::Biweight,
            "tri" | "triangle" | "Triangle" => WeightFunction::Triangle,
            "tricube" | "Tricube" => WeightFunction::Tricube,
            "rect" | "uniform" | "Uniform" => WeightFunction::Uniform,
            "cos" | "cosine" | "Cosine" => WeightFunction::Cosine,
            other => return Err(CrossCovError::UnknownKernel(other.to_string())),
        };
        Ok(kernel)
    }
}

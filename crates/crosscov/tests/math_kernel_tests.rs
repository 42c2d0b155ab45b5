#![cfg(feature = "dev")]
//! Tests for kernel weight functions.
//!
//! These tests verify the kernel primitives used by the local linear smoother:
//! - Weight values and support boundaries
//! - Kernel constants used by GCV
//! - Name parsing
//!
//! ## Test Organization
//!
//! 1. **Weights** - Shape, symmetry, support
//! 2. **Constants** - Integrators and density at zero
//! 3. **Parsing** - Accepted aliases and unknown names

use approx::assert_relative_eq;

use crosscov::internals::math::kernel::WeightFunction;
use crosscov::prelude::CrossCovError;

const ALL: [WeightFunction; 7] = [
    WeightFunction::Gaussian,
    WeightFunction::Epanechnikov,
    WeightFunction::Biweight,
    WeightFunction::Triangle,
    WeightFunction::Tricube,
    WeightFunction::Uniform,
    WeightFunction::Cosine,
];

// ============================================================================
// Weight Tests
// ============================================================================

/// Test every kernel peaks at one at the origin.
#[test]
fn test_weight_at_origin() {
    for wf in ALL {
        assert_relative_eq!(wf.compute_weight(0.0_f64), 1.0, epsilon = 1e-15);
    }
}

/// Test kernels are symmetric.
#[test]
fn test_weight_symmetry() {
    for wf in ALL {
        for &u in &[0.1_f64, 0.35, 0.8, 2.5] {
            assert_eq!(wf.compute_weight(u), wf.compute_weight(-u), "{}", wf.name());
        }
    }
}

/// Test bounded kernels vanish at and beyond the unit boundary.
#[test]
fn test_bounded_support() {
    for wf in ALL.iter().filter(|wf| wf.support().is_some()) {
        assert_eq!(wf.compute_weight(1.0_f64), 0.0, "{}", wf.name());
        assert_eq!(wf.compute_weight(1.5_f64), 0.0, "{}", wf.name());
        assert!(wf.compute_weight(0.99_f64) >= 0.0);
        assert_eq!(wf.support_radius(), Some(1.0));
    }
}

/// Test the Gaussian has no support radius.
#[test]
fn test_gaussian_unbounded() {
    let wf = WeightFunction::Gaussian;
    assert!(wf.support().is_none());
    assert_eq!(wf.support_radius(), None);
    assert_relative_eq!(wf.compute_weight(1.0_f64), (-0.5_f64).exp(), epsilon = 1e-15);
    assert_relative_eq!(wf.compute_weight(7.0_f64), (-24.5_f64).exp(), max_relative = 1e-12);
    assert!(wf.compute_weight(20.0_f64) > 0.0);

    // Far tails underflow
    assert_eq!(wf.compute_weight(100.0_f64), 0.0);
}

/// Test specific kernel shapes.
#[test]
fn test_kernel_shapes() {
    assert_relative_eq!(WeightFunction::Epanechnikov.compute_weight(0.5_f64), 0.75);
    assert_relative_eq!(WeightFunction::Biweight.compute_weight(0.5_f64), 0.5625);
    assert_relative_eq!(WeightFunction::Triangle.compute_weight(0.25_f64), 0.75);
    assert_relative_eq!(WeightFunction::Uniform.compute_weight(0.9_f64), 1.0);
    assert_relative_eq!(
        WeightFunction::Cosine.compute_weight(0.5_f64),
        core::f64::consts::FRAC_PI_4.cos(),
        epsilon = 1e-15
    );
}

/// Test weights also compute in single precision.
#[test]
fn test_weight_f32() {
    assert_relative_eq!(WeightFunction::Epanechnikov.compute_weight(0.5_f32), 0.75_f32);
    assert_eq!(WeightFunction::Tricube.compute_weight(1.0_f32), 0.0_f32);
}

// ============================================================================
// Constant Tests
// ============================================================================

/// Test the Gaussian GCV constant is 1/sqrt(2 pi).
#[test]
fn test_gaussian_density_at_zero() {
    let k0 = WeightFunction::Gaussian.density_at_zero();
    assert_relative_eq!(k0, 0.398_942_280_401_432_7, epsilon = 1e-15);
}

/// Test the integrators match closed forms.
#[test]
fn test_integrators() {
    assert_relative_eq!(WeightFunction::Epanechnikov.integrator(), 4.0 / 3.0);
    assert_relative_eq!(WeightFunction::Biweight.integrator(), 16.0 / 15.0);
    assert_relative_eq!(WeightFunction::Uniform.integrator(), 2.0);
    assert_relative_eq!(
        WeightFunction::Gaussian.integrator(),
        (2.0 * core::f64::consts::PI).sqrt(),
        epsilon = 1e-15
    );
    assert_relative_eq!(WeightFunction::Triangle.density_at_zero(), 1.0);
}

/// Test only the Gaussian supports automatic selection.
#[test]
fn test_supports_gcv() {
    for wf in ALL {
        assert_eq!(wf.supports_gcv(), wf == WeightFunction::Gaussian);
    }
    assert_eq!(WeightFunction::default(), WeightFunction::Gaussian);
}

// ============================================================================
// Parsing Tests
// ============================================================================

/// Test accepted kernel names and aliases.
#[test]
fn test_parse_names() {
    let cases = [
        ("gauss", WeightFunction::Gaussian),
        ("gaussian", WeightFunction::Gaussian),
        ("epan", WeightFunction::Epanechnikov),
        ("quar", WeightFunction::Biweight),
        ("biweight", WeightFunction::Biweight),
        ("tricube", WeightFunction::Tricube),
        ("rect", WeightFunction::Uniform),
        ("cosine", WeightFunction::Cosine),
    ];
    for (name, expected) in cases {
        assert_eq!(name.parse::<WeightFunction>(), Ok(expected), "{name}");
    }
}

/// Test unknown names are rejected with the name echoed.
#[test]
fn test_parse_unknown() {
    assert_eq!(
        "banana".parse::<WeightFunction>(),
        Err(CrossCovError::UnknownKernel("banana".into()))
    );
}

//! Tests for the builder API.
//!
//! ## Test Organization
//!
//! 1. **Configuration** - Defaults and setters
//! 2. **Build Errors** - Duplicates, kernel names, invalid values

use crosscov::prelude::*;

// ============================================================================
// Configuration Tests
// ============================================================================

/// Test builder defaults.
#[test]
fn test_builder_defaults() {
    let model = CrossCov::<f64>::new().build().unwrap();
    let config = model.config();

    assert!(config.bandwidth.is_none());
    assert_eq!(config.weight_function, Gaussian);
    assert!(config.covariate_mean.is_none());
    assert!(config.support.is_none());
}

/// Test setters reach the configuration.
#[test]
fn test_builder_setters() {
    let model = CrossCov::new()
        .bandwidth(0.15)
        .kernel_name("epan")
        .covariate_mean(2.5)
        .support(vec![0.0, 0.5, 1.0])
        .build()
        .unwrap();
    let config = model.config();

    assert_eq!(config.bandwidth, Some(0.15));
    assert_eq!(config.weight_function, Epanechnikov);
    assert_eq!(config.covariate_mean, Some(2.5));
    assert_eq!(config.support.as_deref(), Some(&[0.0, 0.5, 1.0][..]));
}

// ============================================================================
// Build Error Tests
// ============================================================================

/// Test setting a parameter twice is rejected.
#[test]
fn test_duplicate_parameters() {
    let err = CrossCov::new().bandwidth(0.1).bandwidth(0.2).build().unwrap_err();
    assert_eq!(
        err,
        CrossCovError::DuplicateParameter {
            parameter: "bandwidth"
        }
    );

    // A kernel set by value and by name is the same parameter
    let err = CrossCov::new()
        .bandwidth(0.1)
        .weight_function(Uniform)
        .kernel_name("rect")
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        CrossCovError::DuplicateParameter {
            parameter: "weight_function"
        }
    );
}

/// Test unknown kernel names surface at build time.
#[test]
fn test_unknown_kernel_name() {
    let err = CrossCov::<f64>::new().kernel_name("banana").build().unwrap_err();
    assert_eq!(err, CrossCovError::UnknownKernel("banana".into()));
}

/// Test invalid numeric parameters.
#[test]
fn test_invalid_parameters() {
    assert_eq!(
        CrossCov::new().bandwidth(-1.0).build().unwrap_err(),
        CrossCovError::InvalidBandwidth(-1.0)
    );
    assert!(matches!(
        CrossCov::new().covariate_mean(f64::NAN).build(),
        Err(CrossCovError::InvalidNumericValue(_))
    ));
    assert!(matches!(
        CrossCov::<f64>::new().support(vec![]).build(),
        Err(CrossCovError::InvalidInput(_))
    ));
}

/// Test error messages are readable.
#[test]
fn test_error_display() {
    let err = CrossCovError::InputCardinality {
        subjects: 4,
        covariates: 3,
    };
    let text = err.to_string();
    assert!(text.contains('4') && text.contains('3'));

    let err = CrossCovError::UnsupportedKernel { kernel: "Cosine" };
    assert!(err.to_string().contains("Cosine"));
}

#![cfg(all(feature = "dev", feature = "cpu"))]
//! Tests for the parallel smoothing and scoring passes in isolation.
//!
//! ## Test Organization
//!
//! 1. **Smoothing Pass** - Agreement with the sequential pass
//! 2. **Scoring Pass** - Agreement with sequential scoring

use crosscov::internals::algorithms::regression::smooth_pass_sorted;
use crosscov::internals::engine::executor::CrossCovConfig;
use crosscov::internals::evaluation::gcv::{bandwidth_candidates, score_candidates};
use crosscov::internals::math::kernel::WeightFunction;
use crosscov::internals::primitives::sorting::{sort_samples, SortedSamples};
use fastCrosscov::internals::engine::executor::smooth_pass_parallel;
use fastCrosscov::internals::evaluation::gcv::gcv_pass_parallel;

// ============================================================================
// Helper Functions
// ============================================================================

fn raw_samples() -> SortedSamples<f64> {
    let t: Vec<f64> = (0..400).map(|i| ((i * 7919) % 400) as f64 / 399.0).collect();
    let y: Vec<f64> = t
        .iter()
        .enumerate()
        .map(|(i, &v)| (5.0 * v).cos() + ((i % 13) as f64 - 6.0) * 0.05)
        .collect();
    sort_samples(&t, &y, None)
}

fn grid() -> Vec<f64> {
    (0..=100).map(|k| k as f64 / 100.0).collect()
}

// ============================================================================
// Smoothing Pass Tests
// ============================================================================

/// Test the parallel pass reproduces the sequential pass exactly.
#[test]
fn test_smooth_pass_matches_sequential() {
    let raw = raw_samples();
    let grid = grid();

    for wf in [WeightFunction::Gaussian, WeightFunction::Biweight] {
        let seq = smooth_pass_sorted(&raw, &grid, 0.07, wf).unwrap();
        let par = smooth_pass_parallel(&raw, &grid, 0.07, wf).unwrap();
        assert_eq!(seq, par, "{}", wf.name());
    }
}

/// Test the parallel pass reports the first failure in grid order.
#[test]
fn test_smooth_pass_first_failure() {
    let raw = raw_samples();
    let grid = [0.5, 2.0, 3.0, -4.0];

    let seq = smooth_pass_sorted(&raw, &grid, 0.05, WeightFunction::Uniform).unwrap_err();
    let par = smooth_pass_parallel(&raw, &grid, 0.05, WeightFunction::Uniform).unwrap_err();

    assert_eq!(par.location, 2.0);
    assert_eq!(seq, par);
}

// ============================================================================
// Scoring Pass Tests
// ============================================================================

/// Test parallel scores equal sequential scores candidate by candidate.
#[test]
fn test_gcv_pass_matches_sequential() {
    let raw = raw_samples();
    let grid = grid();
    let candidates = bandwidth_candidates(&raw.x).unwrap();
    let config = CrossCovConfig::default();

    let seq = score_candidates(&raw, &grid, &candidates, config.weight_function, |h| {
        smooth_pass_sorted(&raw, &grid, h, config.weight_function)
    });
    let par = gcv_pass_parallel(&raw, &grid, &candidates, &config);

    assert_eq!(seq, par);
}

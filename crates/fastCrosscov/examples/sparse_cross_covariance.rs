//! fastCrosscov Examples
//!
//! This example demonstrates:
//! - Sparse curves with GCV bandwidth selection (parallel)
//! - The same estimate with parallelism disabled
//! - A fixed bandwidth with a non-Gaussian kernel
//! - Dense `ndarray` input without time information

use fastCrosscov::prelude::*;
use ndarray::{Array1, Array2};
use std::f64::consts::PI;
use std::time::Instant;

fn main() -> Result<(), CrossCovError> {
    println!("{}", "=".repeat(80));
    println!("fastCrosscov Examples");
    println!("{}", "=".repeat(80));
    println!();

    let (samples, covariates, mean) = synthetic_sparse(400)?;

    example_1_gcv_parallel(&samples, &covariates, &mean)?;
    example_2_sequential(&samples, &covariates, &mean)?;
    example_3_fixed_bandwidth(&samples, &covariates, &mean)?;
    example_4_dense_ndarray()?;

    Ok(())
}

/// Subjects with 3-7 irregular times on [0, 1].
///
/// `Y_i(t) = t + z_i * sin(2 pi t)`, so `Cov(Y(t), Z) = Var(Z) * sin(2 pi t)`.
fn synthetic_sparse(
    n: usize,
) -> Result<(SubjectSamples<f64>, Vec<f64>, GridFunction<f64>), CrossCovError> {
    let mut subjects = Vec::with_capacity(n);
    let mut covariates = Vec::with_capacity(n);

    for i in 0..n {
        let z = ((i * 37 % 101) as f64 / 50.0) - 1.0;
        let m = 3 + i % 5;
        let t: Vec<f64> = (0..m)
            .map(|j| ((i * 13 + j * 29) % 97) as f64 / 96.0)
            .collect();
        let y: Vec<f64> = t.iter().map(|&t| t + z * (2.0 * PI * t).sin()).collect();

        subjects.push(SubjectSample::new(t, y));
        covariates.push(z);
    }

    let mean_grid: Vec<f64> = (0..=20).map(|k| k as f64 / 20.0).collect();
    let mean = GridFunction::new(mean_grid.clone(), mean_grid)?;

    Ok((SubjectSamples::Sparse(subjects), covariates, mean))
}

/// Example 1: GCV bandwidth selection, parallel (default)
fn example_1_gcv_parallel(
    samples: &SubjectSamples<f64>,
    covariates: &[f64],
    mean: &GridFunction<f64>,
) -> Result<(), CrossCovError> {
    println!("Example 1: GCV Bandwidth Selection (parallel)");
    println!("{}", "-".repeat(80));

    let start = Instant::now();
    let model = CrossCov::new().build()?;
    let result = model.fit(samples, covariates, Some(mean))?;

    println!("Finished in {:?}", start.elapsed());
    if let (Some(candidates), Some(scores)) = (&result.candidates, &result.gcv_scores) {
        for (h, s) in candidates.iter().zip(scores) {
            println!("  h = {:>8.5}  GCV = {:>12.6}", h, s);
        }
    }
    println!("{}", result);
    Ok(())
}

/// Example 2: Sequential execution gives the same bandwidth
fn example_2_sequential(
    samples: &SubjectSamples<f64>,
    covariates: &[f64],
    mean: &GridFunction<f64>,
) -> Result<(), CrossCovError> {
    println!("Example 2: Sequential Execution");
    println!("{}", "-".repeat(80));

    let start = Instant::now();
    let model = CrossCov::new().parallel(false).build()?;
    let result = model.fit(samples, covariates, Some(mean))?;

    println!("Finished in {:?}", start.elapsed());
    println!("Selected bandwidth: {:?}", result.bandwidth);
    println!();
    Ok(())
}

/// Example 3: Fixed bandwidth with the Epanechnikov kernel
fn example_3_fixed_bandwidth(
    samples: &SubjectSamples<f64>,
    covariates: &[f64],
    mean: &GridFunction<f64>,
) -> Result<(), CrossCovError> {
    println!("Example 3: Fixed Bandwidth (Epanechnikov)");
    println!("{}", "-".repeat(80));

    let support: Vec<f64> = (0..=10).map(|k| k as f64 / 10.0).collect();
    let model = CrossCov::new()
        .bandwidth(0.1)
        .kernel_name("epan")
        .support(support)
        .build()?;
    let result = model.fit(samples, covariates, Some(mean))?;

    if let (Some(grid), Some(values)) = (result.grid(), result.values()) {
        let var_z = sample_variance(covariates);
        println!("{:>6} {:>12} {:>12}", "t", "estimate", "truth");
        for (&t, &c) in grid.iter().zip(values) {
            println!("{:>6.2} {:>12.6} {:>12.6}", t, c, var_z * (2.0 * PI * t).sin());
        }
    }
    println!();
    Ok(())
}

/// Example 4: Dense ndarray input, column-wise covariances
fn example_4_dense_ndarray() -> Result<(), CrossCovError> {
    println!("Example 4: Dense ndarray Input");
    println!("{}", "-".repeat(80));

    let n = 50;
    let p = 6;
    let z = Array1::from_shape_fn(n, |i| (i as f64 / n as f64) - 0.5);
    let curves = Array2::from_shape_fn((n, p), |(i, j)| {
        let t = j as f64 / (p - 1) as f64;
        t + z[i] * (2.0 * PI * t).sin()
    });

    let model = CrossCov::new().build()?;
    let result = model.fit_dense(&curves, None, &z, None)?;
    println!("{}", result);
    Ok(())
}

fn sample_variance(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)
}

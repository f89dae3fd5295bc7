//! Kernels checked against independent implementations from `ndarray` and
//! `ndarray-stats` on seeded random sensor data.

use ndarray::{Array1, Axis};
use ndarray_stats::{QuantileExt, SummaryStatisticsExt};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use sigsimd::signal::{cross_correlation, cumulative_sum, min_index, weighted_average};

const SIZES: &[usize] = &[1, 3, 4, 5, 17, 64, 1023, 4096];

fn generate_random_data(len: usize, seed: u64) -> (Vec<f32>, Vec<f32>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let a: Vec<f32> = (0..len).map(|_| rng.random_range(0.0..100.0)).collect();
    let b: Vec<f32> = (0..len).map(|_| rng.random_range(0.01..1.0)).collect();
    (a, b)
}

#[test]
fn test_weighted_average_against_ndarray_stats() {
    for &size in SIZES {
        let (values, weights) = generate_random_data(size, 42 + size as u64);

        let expected = Array1::from_vec(values.clone())
            .weighted_mean(&Array1::from_vec(weights.clone()))
            .unwrap();
        let actual = weighted_average(&values, &weights).unwrap();

        let relative_error = (actual - expected).abs() / expected.abs().max(1.0);
        println!("size {size}: sigsimd={actual:.6}, ndarray-stats={expected:.6}, rel={relative_error:.2e}");
        assert!(
            relative_error < 1e-4,
            "size {size}: {actual} vs {expected} (rel {relative_error:.2e})"
        );
    }
}

#[test]
fn test_min_index_against_argmin() {
    for &size in SIZES {
        let (values, _) = generate_random_data(size, 7 + size as u64);
        // quantize so that repeated minima occur
        let values: Vec<f32> = values.iter().map(|v| (v / 10.0).floor()).collect();

        let expected = Array1::from_vec(values.clone()).argmin().unwrap();
        assert_eq!(min_index(&values), expected, "size {size}");
    }
}

#[test]
fn test_cross_correlation_against_dot() {
    for &size in SIZES {
        let (a, b) = generate_random_data(size, 99 + size as u64);

        let expected = Array1::from_vec(a.clone()).dot(&Array1::from_vec(b.clone()));
        let actual = cross_correlation(&a, &b).unwrap();

        let relative_error = (actual - expected).abs() / expected.abs().max(1.0);
        assert!(
            relative_error < 1e-4,
            "size {size}: {actual} vs {expected} (rel {relative_error:.2e})"
        );
    }
}

#[test]
fn test_cumulative_sum_against_accumulate_axis() {
    for &size in SIZES {
        let (input, _) = generate_random_data(size, 3 + size as u64);

        let mut expected = Array1::from_vec(input.clone());
        expected.accumulate_axis_inplace(Axis(0), |&prev, curr| *curr += prev);

        let mut actual = vec![0.0f32; size];
        cumulative_sum(&input, &mut actual).unwrap();

        for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
            assert_eq!(a.to_bits(), e.to_bits(), "size {size} index {i}: {a} vs {e}");
        }
    }
}

//! Weighted average.

use crate::error::{check_len, Result};
use crate::simd::{Blocks, Native, SimdVec};

#[inline(always)]
fn guarded_ratio(weighted_sum: f32, weight_sum: f32) -> f32 {
    if weight_sum > 0.0 {
        weighted_sum / weight_sum
    } else {
        0.0
    }
}

pub fn scalar_weighted_average(values: &[f32], weights: &[f32]) -> Result<f32> {
    check_len("weights", values.len(), weights.len())?;

    let mut weighted_sum = 0.0f32;
    let mut weight_sum = 0.0f32;
    for (&value, &weight) in values.iter().zip(weights) {
        weighted_sum += value * weight;
        weight_sum += weight;
    }

    Ok(guarded_ratio(weighted_sum, weight_sum))
}

/// Weighted average with lane accumulators of type `V`.
///
/// `sum(v*w)` and `sum(w)` are accumulated per lane over the full blocks,
/// reduced horizontally, and the tail is folded into the reduced scalars.
pub fn weighted_average_with<V: SimdVec>(values: &[f32], weights: &[f32]) -> Result<f32> {
    check_len("weights", values.len(), weights.len())?;

    let blocks = Blocks::new(values.len(), V::LANES);

    let mut acc_weighted = V::zero();
    let mut acc_weights = V::zero();

    for i in blocks.starts() {
        let vals = V::load(&values[i..]);
        let wts = V::load(&weights[i..]);

        acc_weighted = acc_weighted.fmadd(vals, wts);
        acc_weights += wts;
    }

    let mut weighted_sum = acc_weighted.horizontal_sum();
    let mut weight_sum = acc_weights.horizontal_sum();

    for i in blocks.tail() {
        weighted_sum += values[i] * weights[i];
        weight_sum += weights[i];
    }

    Ok(guarded_ratio(weighted_sum, weight_sum))
}

/// `sum(values[i] * weights[i]) / sum(weights[i])`.
///
/// Returns `0.0` when the total weight is not positive, which includes the
/// empty input and all-zero weights. No error is raised for that case.
///
/// # Errors
///
/// Returns [`crate::SignalError::LengthMismatch`] if `weights` and `values`
/// differ in length.
pub fn weighted_average(values: &[f32], weights: &[f32]) -> Result<f32> {
    weighted_average_with::<Native>(values, weights)
}

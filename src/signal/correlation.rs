//! Zero-lag cross-correlation (dot product of two signals).

use crate::error::{check_len, Result};
use crate::simd::{Blocks, Native, SimdVec};

pub fn scalar_cross_correlation(signal1: &[f32], signal2: &[f32]) -> Result<f32> {
    check_len("signal2", signal1.len(), signal2.len())?;

    let mut result = 0.0f32;
    for (&a, &b) in signal1.iter().zip(signal2) {
        result += a * b;
    }
    Ok(result)
}

pub fn cross_correlation_with<V: SimdVec>(signal1: &[f32], signal2: &[f32]) -> Result<f32> {
    check_len("signal2", signal1.len(), signal2.len())?;

    let blocks = Blocks::new(signal1.len(), V::LANES);

    let mut sum = V::zero();
    for i in blocks.starts() {
        sum = sum.fmadd(V::load(&signal1[i..]), V::load(&signal2[i..]));
    }

    let mut result = sum.horizontal_sum();
    for i in blocks.tail() {
        result += signal1[i] * signal2[i];
    }

    Ok(result)
}

/// `sum(signal1[i] * signal2[i])` at lag zero, unnormalized.
///
/// # Errors
///
/// Returns [`crate::SignalError::LengthMismatch`] if the signals differ in
/// length.
pub fn cross_correlation(signal1: &[f32], signal2: &[f32]) -> Result<f32> {
    cross_correlation_with::<Native>(signal1, signal2)
}

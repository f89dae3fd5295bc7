//! Threshold detection into byte flags.

use crate::error::{check_len, Result};
use crate::simd::{Blocks, Native, SimdVec};

pub fn scalar_threshold_detection(data: &[f32], flags: &mut [u8], threshold: f32) -> Result<()> {
    check_len("flags", data.len(), flags.len())?;

    for (flag, &x) in flags.iter_mut().zip(data) {
        *flag = u8::from(x > threshold);
    }

    Ok(())
}

pub fn threshold_detection_with<V: SimdVec>(
    data: &[f32],
    flags: &mut [u8],
    threshold: f32,
) -> Result<()> {
    check_len("flags", data.len(), flags.len())?;

    let blocks = Blocks::new(data.len(), V::LANES);
    let thresh_vec = V::splat(threshold);

    for i in blocks.starts() {
        V::store_flags(V::load(&data[i..]).gt_mask(thresh_vec), &mut flags[i..]);
    }

    for i in blocks.tail() {
        flags[i] = u8::from(data[i] > threshold);
    }

    Ok(())
}

/// `flags[i] = 1` where `data[i] > threshold`, `0` otherwise (including values
/// equal to the threshold and NaN). One byte per input element.
///
/// # Errors
///
/// Returns [`crate::SignalError::LengthMismatch`] if `flags` is not the same
/// length as `data`.
pub fn threshold_detection(data: &[f32], flags: &mut [u8], threshold: f32) -> Result<()> {
    threshold_detection_with::<Native>(data, flags, threshold)
}

//! Speed from two position snapshots.

use crate::error::{check_len, Result};
use crate::simd::{Blocks, Native, SimdVec};

pub fn scalar_speed(prev: &[f32], curr: &[f32], out: &mut [f32], time_delta: f32) -> Result<()> {
    check_operands(prev, curr, out)?;

    for i in 0..prev.len() {
        out[i] = (curr[i] - prev[i]) / time_delta;
    }

    Ok(())
}

/// Full blocks multiply by the precomputed reciprocal; the tail divides
/// directly. The two can differ in the last bit.
pub fn speed_with<V: SimdVec>(
    prev: &[f32],
    curr: &[f32],
    out: &mut [f32],
    time_delta: f32,
) -> Result<()> {
    check_operands(prev, curr, out)?;

    let blocks = Blocks::new(prev.len(), V::LANES);
    let time_inv = V::splat(1.0 / time_delta);

    for i in blocks.starts() {
        let diff = V::load(&curr[i..]) - V::load(&prev[i..]);
        (diff * time_inv).store(&mut out[i..]);
    }

    for i in blocks.tail() {
        out[i] = (curr[i] - prev[i]) / time_delta;
    }

    Ok(())
}

/// `out[i] = (curr[i] - prev[i]) / time_delta`.
///
/// `time_delta` is not checked: zero yields IEEE infinities or NaN in `out`.
///
/// # Errors
///
/// Returns [`crate::SignalError::LengthMismatch`] unless `prev`, `curr` and
/// `out` have the same length.
pub fn speed(prev: &[f32], curr: &[f32], out: &mut [f32], time_delta: f32) -> Result<()> {
    speed_with::<Native>(prev, curr, out, time_delta)
}

fn check_operands(prev: &[f32], curr: &[f32], out: &[f32]) -> Result<()> {
    check_len("curr", prev.len(), curr.len())?;
    check_len("out", prev.len(), out.len())
}

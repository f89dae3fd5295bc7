//! Running (inclusive prefix) sum.
//!
//! This is one of the two order-sensitive kernels: the block path scans each
//! block left to right from the carried-in total, so its output is bit-for-bit
//! the sequential definition rather than merely close to it.

use crate::error::{check_len, Result};
use crate::simd::{Native, SequentialScan, SimdVec};

pub fn scalar_cumulative_sum(input: &[f32], output: &mut [f32]) -> Result<()> {
    check_len("output", input.len(), output.len())?;

    let Some(&first) = input.first() else {
        return Ok(());
    };

    output[0] = first;
    for i in 1..input.len() {
        output[i] = output[i - 1] + input[i];
    }

    Ok(())
}

pub fn cumulative_sum_with<V: SimdVec>(input: &[f32], output: &mut [f32]) -> Result<()> {
    check_len("output", input.len(), output.len())?;

    let Some(&first) = input.first() else {
        return Ok(());
    };

    SequentialScan::new(input.len(), V::LANES).run(
        output,
        first,
        |start, carry, out| {
            V::load(&input[start..]).scan_from(carry).store(out);
            out[V::LANES - 1]
        },
        |i, carry| carry + input[i],
    );

    Ok(())
}

/// `output[0] = input[0]`, `output[i] = output[i-1] + input[i]`.
///
/// An empty input performs no writes.
///
/// # Errors
///
/// Returns [`crate::SignalError::LengthMismatch`] if `output` is not the same
/// length as `input`.
pub fn cumulative_sum(input: &[f32], output: &mut [f32]) -> Result<()> {
    cumulative_sum_with::<Native>(input, output)
}

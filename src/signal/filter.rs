//! Smoothing filters: causal moving average and exponential moving average.

use crate::error::{check_len, Result};
use crate::simd::{Blocks, Native, SequentialScan, SimdVec};

#[inline(always)]
fn window_start(i: usize, window_size: usize) -> usize {
    (i + 1).saturating_sub(window_size)
}

#[inline(always)]
fn window_sum<V: SimdVec>(window: &[f32]) -> f32 {
    let blocks = Blocks::new(window.len(), V::LANES);

    let mut acc = V::zero();
    for j in blocks.starts() {
        acc += V::load(&window[j..]);
    }

    let mut total = acc.horizontal_sum();
    for j in blocks.tail() {
        total += window[j];
    }
    total
}

pub fn scalar_moving_average(input: &[f32], output: &mut [f32], window_size: usize) -> Result<()> {
    check_len("output", input.len(), output.len())?;

    if window_size == 0 {
        return Ok(());
    }

    for i in 0..input.len() {
        let start = window_start(i, window_size);
        let mut total = 0.0f32;
        for &x in &input[start..=i] {
            total += x;
        }
        output[i] = total / (i + 1 - start) as f32;
    }

    Ok(())
}

pub fn moving_average_with<V: SimdVec>(
    input: &[f32],
    output: &mut [f32],
    window_size: usize,
) -> Result<()> {
    check_len("output", input.len(), output.len())?;

    if window_size == 0 || input.is_empty() {
        return Ok(());
    }

    for (i, out) in output.iter_mut().enumerate() {
        let window = &input[window_start(i, window_size)..=i];
        *out = window_sum::<V>(window) / window.len() as f32;
    }

    Ok(())
}

/// Causal moving average over the last `window_size` samples.
///
/// The window for index `i` is `input[max(0, i - window_size + 1)..=i]`, so it
/// grows from one sample at the start until it reaches `window_size`, and each
/// output is divided by the number of samples actually in its window. Nothing
/// is zero-padded.
///
/// `window_size == 0` or an empty input is a no-op: `output` is left exactly
/// as the caller passed it.
///
/// # Errors
///
/// Returns [`crate::SignalError::LengthMismatch`] if `output` is not the same
/// length as `input`.
pub fn moving_average(input: &[f32], output: &mut [f32], window_size: usize) -> Result<()> {
    moving_average_with::<Native>(input, output, window_size)
}

pub fn scalar_exp_moving_average(input: &[f32], output: &mut [f32], alpha: f32) -> Result<()> {
    check_len("output", input.len(), output.len())?;

    if input.is_empty() {
        return Ok(());
    }

    output[0] = input[0];
    for i in 1..input.len() {
        output[i] = alpha * input[i] + (1.0 - alpha) * output[i - 1];
    }

    Ok(())
}

/// Exponential moving average, `output[i] = alpha*input[i] + (1-alpha)*output[i-1]`
/// seeded with `output[0] = input[0]`.
///
/// Every output depends on the one before it, so this runs as a strict scalar
/// scan and is never split into independent blocks. `alpha` is not validated;
/// `alpha == 1.0` copies the input. An empty input is a no-op.
///
/// # Errors
///
/// Returns [`crate::SignalError::LengthMismatch`] if `output` is not the same
/// length as `input`.
pub fn exp_moving_average(input: &[f32], output: &mut [f32], alpha: f32) -> Result<()> {
    check_len("output", input.len(), output.len())?;

    let Some(&first) = input.first() else {
        return Ok(());
    };

    let keep = 1.0 - alpha;
    SequentialScan::new(input.len(), 1).run_scalar(output, first, |i, previous| {
        alpha * input[i] + keep * previous
    });

    Ok(())
}

//! Squared Euclidean distance between batches of 2D point pairs.

use crate::error::{check_len, Result};
use crate::simd::{Blocks, Native, SimdVec};

/// Squared distance for one lane batch of point pairs, `(x2-x1)^2 + (y2-y1)^2`.
///
/// The caller supplies exactly one vector of points; there is no remainder
/// handling at this level. Use [`pairwise_distance_squared`] for slices of any
/// length.
#[inline(always)]
pub fn distance_squared<V: SimdVec>(x1: V, y1: V, x2: V, y2: V) -> V {
    let dx = x2 - x1;
    let dy = y2 - y1;
    dx * dx + dy * dy
}

pub fn scalar_pairwise_distance_squared(
    x1: &[f32],
    y1: &[f32],
    x2: &[f32],
    y2: &[f32],
    out: &mut [f32],
) -> Result<()> {
    check_operands(x1, y1, x2, y2, out)?;

    for i in 0..x1.len() {
        let dx = x2[i] - x1[i];
        let dy = y2[i] - y1[i];
        out[i] = dx * dx + dy * dy;
    }

    Ok(())
}

/// Squared distance for every point pair, using `V` for the full blocks.
pub fn pairwise_distance_squared_with<V: SimdVec>(
    x1: &[f32],
    y1: &[f32],
    x2: &[f32],
    y2: &[f32],
    out: &mut [f32],
) -> Result<()> {
    check_operands(x1, y1, x2, y2, out)?;

    let blocks = Blocks::new(x1.len(), V::LANES);

    for i in blocks.starts() {
        distance_squared(
            V::load(&x1[i..]),
            V::load(&y1[i..]),
            V::load(&x2[i..]),
            V::load(&y2[i..]),
        )
        .store(&mut out[i..]);
    }

    for i in blocks.tail() {
        let dx = x2[i] - x1[i];
        let dy = y2[i] - y1[i];
        out[i] = dx * dx + dy * dy;
    }

    Ok(())
}

/// Squared distance for every point pair on the native vector.
///
/// # Errors
///
/// Returns [`crate::SignalError::LengthMismatch`] unless all five slices have
/// the same length.
pub fn pairwise_distance_squared(
    x1: &[f32],
    y1: &[f32],
    x2: &[f32],
    y2: &[f32],
    out: &mut [f32],
) -> Result<()> {
    pairwise_distance_squared_with::<Native>(x1, y1, x2, y2, out)
}

fn check_operands(x1: &[f32], y1: &[f32], x2: &[f32], y2: &[f32], out: &[f32]) -> Result<()> {
    let n = x1.len();
    check_len("y1", n, y1.len())?;
    check_len("x2", n, x2.len())?;
    check_len("y2", n, y2.len())?;
    check_len("out", n, out.len())
}

//! Arg-min search.

use crate::simd::{Blocks, Native, SimdVec};

// Widest vector the lane reduction has stack room for.
const MAX_LANES: usize = 64;

pub fn scalar_min_index(data: &[f32]) -> usize {
    let Some(&first) = data.first() else {
        return 0;
    };

    let mut min_val = first;
    let mut min_idx = 0;
    for (i, &x) in data.iter().enumerate().skip(1) {
        if x < min_val {
            min_val = x;
            min_idx = i;
        }
    }
    min_idx
}

/// Arg-min with per-lane running minima of type `V`.
///
/// Each lane keeps its smallest value and the index where it first saw it,
/// replacing both only on a strict `<`. The lanes are then merged, preferring
/// the lower index when two lanes hold the same value, and the tail is scanned
/// with the same strict comparison. NaN never compares less than anything, so
/// a NaN is only ever reported when it sits at index 0.
pub fn try_min_index_with<V: SimdVec>(data: &[f32]) -> Option<usize> {
    let &first = data.first()?;

    // lane indices are u32
    if data.len() > u32::MAX as usize || V::LANES > MAX_LANES {
        return Some(scalar_min_index(data));
    }

    let blocks = Blocks::new(data.len(), V::LANES);

    let mut min_val = first;
    let mut min_idx = 0usize;

    if blocks.bulk_len() > 0 {
        let mut min_vec = V::splat(f32::INFINITY);
        let mut min_idx_vec = V::index_ramp(0);

        for i in blocks.starts() {
            let chunk = V::load(&data[i..]);
            let mask = chunk.lt_mask(min_vec);

            min_vec = V::select(mask, chunk, min_vec);
            min_idx_vec = V::select_index(mask, V::index_ramp(i as u32), min_idx_vec);
        }

        let mut values = [f32::INFINITY; MAX_LANES];
        let mut indices = [0u32; MAX_LANES];
        min_vec.store(&mut values);
        V::store_index(min_idx_vec, &mut indices);

        for (&value, &index) in values.iter().zip(&indices).take(V::LANES) {
            let index = index as usize;
            if value < min_val || (value == min_val && index < min_idx) {
                min_val = value;
                min_idx = index;
            }
        }
    }

    for i in blocks.tail() {
        if data[i] < min_val {
            min_val = data[i];
            min_idx = i;
        }
    }

    Some(min_idx)
}

/// Index of the first occurrence of the minimum, or `None` for an empty slice.
pub fn try_min_index(data: &[f32]) -> Option<usize> {
    try_min_index_with::<Native>(data)
}

pub fn min_index_with<V: SimdVec>(data: &[f32]) -> usize {
    try_min_index_with::<V>(data).unwrap_or(0)
}

/// Index of the first occurrence of the minimum value.
///
/// Returns `0` for an empty slice, which cannot be told apart from a minimum
/// at index 0. Use [`try_min_index`] when the distinction matters.
pub fn min_index(data: &[f32]) -> usize {
    min_index_with::<Native>(data)
}

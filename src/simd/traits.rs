use std::fmt::Debug;
use std::ops::{Add, AddAssign, Mul, Sub};

/// A fixed-width vector of `f32` lanes.
///
/// Every kernel in [`crate::signal`] is written once against this trait and
/// reads its block size from [`SimdVec::LANES`], so results never depend on a
/// particular width. The NEON backend implements it over `float32x4_t`; the
/// portable backend implements it for any `Lanes<N>`.
pub trait SimdVec:
    Copy + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + AddAssign
{
    /// Number of `f32` lanes.
    const LANES: usize;

    /// Per-lane boolean produced by comparisons.
    type Mask: Copy;

    /// Per-lane `u32` element indices, used by arg-min style searches.
    type Index: Copy;

    /// Broadcasts `value` to every lane.
    fn splat(value: f32) -> Self;

    #[inline(always)]
    fn zero() -> Self {
        Self::splat(0.0)
    }

    /// Loads the first `LANES` elements of `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `slice.len() < LANES`.
    fn load(slice: &[f32]) -> Self;

    /// Stores every lane into the first `LANES` elements of `out`.
    ///
    /// # Panics
    ///
    /// Panics if `out.len() < LANES`.
    fn store(self, out: &mut [f32]);

    /// `self + a * b`, fused where the hardware has it.
    fn fmadd(self, a: Self, b: Self) -> Self;

    /// Collapses the lanes into one scalar by pairwise addition.
    fn horizontal_sum(self) -> f32;

    /// Lanes where `self < rhs`.
    fn lt_mask(self, rhs: Self) -> Self::Mask;

    /// Lanes where `self > rhs`.
    fn gt_mask(self, rhs: Self) -> Self::Mask;

    /// Picks `if_true` where `mask` is set, `if_false` elsewhere.
    fn select(mask: Self::Mask, if_true: Self, if_false: Self) -> Self;

    /// `[start, start + 1, .., start + LANES - 1]`.
    fn index_ramp(start: u32) -> Self::Index;

    /// Lane-wise select for index vectors.
    fn select_index(mask: Self::Mask, if_true: Self::Index, if_false: Self::Index) -> Self::Index;

    /// Writes every index lane into `out`.
    ///
    /// # Panics
    ///
    /// Panics if `out.len() < LANES`.
    fn store_index(index: Self::Index, out: &mut [u32]);

    /// Unpacks a mask into one byte per lane, `1` for set lanes and `0` otherwise.
    ///
    /// # Panics
    ///
    /// Panics if `out.len() < LANES`.
    fn store_flags(mask: Self::Mask, out: &mut [u8]);

    /// Inclusive prefix sum of the lanes seeded with `carry`.
    ///
    /// Lane `k` holds `((carry + x0) + x1) + .. + xk`, accumulated strictly left
    /// to right so that the result is bit-identical to a sequential running sum.
    fn scan_from(self, carry: f32) -> Self;
}

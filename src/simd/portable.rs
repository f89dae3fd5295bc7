//! Portable lane vectors backed by plain arrays.
//!
//! `Lanes<N>` is the backend on every target without NEON and doubles as the
//! reference vector in tests, where instantiating it at several widths shows
//! that no kernel depends on a particular lane count. The loops are simple
//! enough for LLVM to map onto whatever vector unit the target has.

use std::ops::{Add, AddAssign, Mul, Sub};

use crate::simd::traits::SimdVec;

/// A vector of `N` `f32` lanes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Lanes<const N: usize>([f32; N]);

/// The four-lane portable vector, matching the NEON register width.
pub type F32x4 = Lanes<4>;

impl<const N: usize> Lanes<N> {
    pub fn from_array(elements: [f32; N]) -> Self {
        Self(elements)
    }

    pub fn to_array(self) -> [f32; N] {
        self.0
    }

    #[inline(always)]
    fn zip_with(self, rhs: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        let mut out = self.0;
        for (o, r) in out.iter_mut().zip(rhs.0) {
            *o = f(*o, r);
        }
        Self(out)
    }
}

impl<const N: usize> Add for Lanes<N> {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<const N: usize> AddAssign for Lanes<N> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const N: usize> Sub for Lanes<N> {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<const N: usize> Mul for Lanes<N> {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a * b)
    }
}

impl<const N: usize> SimdVec for Lanes<N> {
    const LANES: usize = N;

    type Mask = [bool; N];

    type Index = [u32; N];

    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self([value; N])
    }

    #[inline(always)]
    fn load(slice: &[f32]) -> Self {
        assert!(slice.len() >= N, "Size must be >= {N}");

        let mut elements = [0.0; N];
        elements.copy_from_slice(&slice[..N]);
        Self(elements)
    }

    #[inline(always)]
    fn store(self, out: &mut [f32]) {
        assert!(out.len() >= N, "Size must be >= {N}");

        out[..N].copy_from_slice(&self.0);
    }

    #[inline(always)]
    fn fmadd(self, a: Self, b: Self) -> Self {
        self + a * b
    }

    #[inline(always)]
    fn horizontal_sum(self) -> f32 {
        // Fold the upper half onto the lower half until one lane is left.
        // For N = 4 this is (x0 + x2) + (x1 + x3), the same tree as NEON.
        let mut lanes = self.0;
        let mut width = N;
        while width > 1 {
            let half = width / 2;
            for i in 0..half {
                lanes[i] += lanes[i + width - half];
            }
            width -= half;
        }
        lanes.first().copied().unwrap_or(0.0)
    }

    #[inline(always)]
    fn lt_mask(self, rhs: Self) -> Self::Mask {
        std::array::from_fn(|i| self.0[i] < rhs.0[i])
    }

    #[inline(always)]
    fn gt_mask(self, rhs: Self) -> Self::Mask {
        std::array::from_fn(|i| self.0[i] > rhs.0[i])
    }

    #[inline(always)]
    fn select(mask: Self::Mask, if_true: Self, if_false: Self) -> Self {
        Self(std::array::from_fn(|i| {
            if mask[i] {
                if_true.0[i]
            } else {
                if_false.0[i]
            }
        }))
    }

    #[inline(always)]
    fn index_ramp(start: u32) -> Self::Index {
        std::array::from_fn(|i| start + i as u32)
    }

    #[inline(always)]
    fn select_index(mask: Self::Mask, if_true: Self::Index, if_false: Self::Index) -> Self::Index {
        std::array::from_fn(|i| if mask[i] { if_true[i] } else { if_false[i] })
    }

    #[inline(always)]
    fn store_index(index: Self::Index, out: &mut [u32]) {
        assert!(out.len() >= N, "Size must be >= {N}");

        out[..N].copy_from_slice(&index);
    }

    #[inline(always)]
    fn store_flags(mask: Self::Mask, out: &mut [u8]) {
        assert!(out.len() >= N, "Size must be >= {N}");

        for (flag, set) in out.iter_mut().zip(mask) {
            *flag = u8::from(set);
        }
    }

    #[inline(always)]
    fn scan_from(self, carry: f32) -> Self {
        let mut lanes = self.0;
        let mut running = carry;
        for lane in lanes.iter_mut() {
            running += *lane;
            *lane = running;
        }
        Self(lanes)
    }
}

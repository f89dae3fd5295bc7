#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use crate::simd::traits::SimdVec;
use std::ops::{Add, AddAssign, Mul, Sub};

pub const LANE_COUNT: usize = 4;

/// A SIMD vector of 4 32-bit floating point values
#[derive(Copy, Clone, Debug)]
pub struct F32x4 {
    elements: float32x4_t,
}

impl F32x4 {
    #[inline(always)]
    pub fn from_array(elements: [f32; LANE_COUNT]) -> Self {
        Self::load(&elements)
    }

    #[inline(always)]
    pub fn to_array(self) -> [f32; LANE_COUNT] {
        let mut out = [0.0f32; LANE_COUNT];
        self.store(&mut out);
        out
    }
}

impl SimdVec for F32x4 {
    const LANES: usize = LANE_COUNT;

    type Mask = uint32x4_t;

    type Index = uint32x4_t;

    /// Creates a new vector with all elements set to the same value.
    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self {
            elements: unsafe { vdupq_n_f32(value) },
        }
    }

    #[inline(always)]
    fn load(slice: &[f32]) -> Self {
        assert!(slice.len() >= LANE_COUNT, "Size must be >= {LANE_COUNT}");

        // SAFETY: at least LANE_COUNT readable elements, vld1q has no alignment requirement
        Self {
            elements: unsafe { vld1q_f32(slice.as_ptr()) },
        }
    }

    #[inline(always)]
    fn store(self, out: &mut [f32]) {
        assert!(out.len() >= LANE_COUNT, "Size must be >= {LANE_COUNT}");

        // SAFETY: at least LANE_COUNT writable elements
        unsafe { vst1q_f32(out.as_mut_ptr(), self.elements) };
    }

    #[inline(always)]
    fn fmadd(self, a: Self, b: Self) -> Self {
        Self {
            elements: unsafe { vfmaq_f32(self.elements, a.elements, b.elements) },
        }
    }

    #[inline(always)]
    fn horizontal_sum(self) -> f32 {
        unsafe {
            let pair = vadd_f32(vget_low_f32(self.elements), vget_high_f32(self.elements));
            vget_lane_f32::<0>(vpadd_f32(pair, pair))
        }
    }

    #[inline(always)]
    fn lt_mask(self, rhs: Self) -> Self::Mask {
        // Compare a<b elementwise
        unsafe { vcltq_f32(self.elements, rhs.elements) }
    }

    #[inline(always)]
    fn gt_mask(self, rhs: Self) -> Self::Mask {
        // Compare a>b elementwise
        unsafe { vcgtq_f32(self.elements, rhs.elements) }
    }

    #[inline(always)]
    fn select(mask: Self::Mask, if_true: Self, if_false: Self) -> Self {
        Self {
            elements: unsafe { vbslq_f32(mask, if_true.elements, if_false.elements) },
        }
    }

    #[inline(always)]
    fn index_ramp(start: u32) -> Self::Index {
        let lanes = [start, start + 1, start + 2, start + 3];
        unsafe { vld1q_u32(lanes.as_ptr()) }
    }

    #[inline(always)]
    fn select_index(mask: Self::Mask, if_true: Self::Index, if_false: Self::Index) -> Self::Index {
        unsafe { vbslq_u32(mask, if_true, if_false) }
    }

    #[inline(always)]
    fn store_index(index: Self::Index, out: &mut [u32]) {
        assert!(out.len() >= LANE_COUNT, "Size must be >= {LANE_COUNT}");

        unsafe { vst1q_u32(out.as_mut_ptr(), index) };
    }

    #[inline(always)]
    fn store_flags(mask: Self::Mask, out: &mut [u8]) {
        assert!(out.len() >= LANE_COUNT, "Size must be >= {LANE_COUNT}");

        // All-ones lanes become 1, then narrow 32 -> 16 -> 8 bits and keep
        // the four bytes that belong to this vector.
        let bytes = unsafe {
            let ones = vandq_u32(mask, vdupq_n_u32(1));
            let narrow16 = vmovn_u32(ones);
            let narrow8 = vmovn_u16(vcombine_u16(narrow16, vdup_n_u16(0)));
            vget_lane_u32::<0>(vreinterpret_u32_u8(narrow8))
        };

        out[..LANE_COUNT].copy_from_slice(&bytes.to_ne_bytes());
    }

    #[inline(always)]
    fn scan_from(self, carry: f32) -> Self {
        let mut lanes = self.to_array();
        let mut running = carry;
        for lane in lanes.iter_mut() {
            running += *lane;
            *lane = running;
        }
        Self::load(&lanes)
    }
}

impl Add for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { vaddq_f32(self.elements, rhs.elements) },
        }
    }
}

impl AddAssign for F32x4 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { vsubq_f32(self.elements, rhs.elements) },
        }
    }
}

impl Mul for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { vmulq_f32(self.elements, rhs.elements) },
        }
    }
}

#[cfg(test)]
#[cfg(target_arch = "aarch64")] // NEON tests only make sense on aarch64
mod tests {
    use super::*;

    fn assert_f32_slice_eq_bitwise(a: &[f32], b: &[f32]) {
        assert_eq!(
            a.len(),
            b.len(),
            "Slice lengths differ (left: {}, right: {})",
            a.len(),
            b.len()
        );
        for i in 0..a.len() {
            assert_eq!(
                a[i].to_bits(),
                b[i].to_bits(),
                "Elements at index {} differ: left={}({:08x}), right={}({:08x})",
                i,
                a[i],
                a[i].to_bits(),
                b[i],
                b[i].to_bits()
            );
        }
    }

    #[test]
    fn test_load_store_roundtrip_unaligned() {
        let data = [9.0f32, 1.0, 2.0, 3.0, 4.0];
        let v = F32x4::load(&data[1..]);

        let mut out = [0.0f32; 5];
        v.store(&mut out[1..]);

        assert_f32_slice_eq_bitwise(&out, &[0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_arithmetic() {
        let a = F32x4::from_array([1.0, 2.0, 3.0, 4.0]);
        let b = F32x4::splat(0.5);

        assert_f32_slice_eq_bitwise(&(a + b).to_array(), &[1.5, 2.5, 3.5, 4.5]);
        assert_f32_slice_eq_bitwise(&(a - b).to_array(), &[0.5, 1.5, 2.5, 3.5]);
        assert_f32_slice_eq_bitwise(&(a * b).to_array(), &[0.5, 1.0, 1.5, 2.0]);
        assert_f32_slice_eq_bitwise(&a.fmadd(a, b).to_array(), &[1.5, 3.0, 4.5, 6.0]);
    }

    #[test]
    fn test_horizontal_sum() {
        assert_eq!(F32x4::from_array([1.0, 2.0, 3.0, 4.0]).horizontal_sum(), 10.0);
        assert_eq!(F32x4::zero().horizontal_sum(), 0.0);
    }

    #[test]
    fn test_min_select_with_indices() {
        let current = F32x4::from_array([3.0, 1.0, 4.0, 1.0]);
        let incoming = F32x4::from_array([2.0, 1.0, 5.0, 0.5]);

        let mask = incoming.lt_mask(current);
        let mins = F32x4::select(mask, incoming, current);
        let idx = F32x4::select_index(mask, F32x4::index_ramp(4), F32x4::index_ramp(0));

        let mut idx_out = [0u32; 4];
        F32x4::store_index(idx, &mut idx_out);

        assert_f32_slice_eq_bitwise(&mins.to_array(), &[2.0, 1.0, 4.0, 0.5]);
        // equal values keep the earlier index
        assert_eq!(idx_out, [4, 1, 2, 7]);
    }

    #[test]
    fn test_store_flags() {
        let data = F32x4::from_array([1.0, 5.0, 3.0, 3.5]);
        let mut flags = [9u8; 6];
        F32x4::store_flags(data.gt_mask(F32x4::splat(3.0)), &mut flags);
        assert_eq!(flags, [0, 1, 0, 1, 9, 9]);
    }

    #[test]
    fn test_scan_from_is_sequential() {
        let input = [0.1f32, 0.7, 1e-8, 3.3];
        let scanned = F32x4::load(&input).scan_from(10.0).to_array();

        let mut expected = [0.0f32; 4];
        let mut running = 10.0f32;
        for (e, x) in expected.iter_mut().zip(input) {
            running += x;
            *e = running;
        }

        assert_f32_slice_eq_bitwise(&scanned, &expected);
    }
}

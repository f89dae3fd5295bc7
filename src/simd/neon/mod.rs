//! ARM NEON backend for 128-bit vector operations.
//!
//! NEON is mandatory on AArch64, so every AArch64 target gets this backend
//! unless the `portable` feature asks otherwise. The build script emits the
//! `neon` cfg only when the target reports the feature.
//!
//! # Characteristics
//!
//! - **Vector width**: 128 bits, 4 × f32
//! - **Loads/stores**: unaligned `vld1q`/`vst1q`; callers pass plain slices
//! - **Reductions**: `vadd_f32` on the halves, then `vpadd_f32`
//! - **Fused multiply-add**: `vfmaq_f32` (single rounding)

pub mod f32x4;

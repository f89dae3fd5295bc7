//! Lane vectors and the loop shapes built on them.
//!
//! [`Native`] is the vector type the build script selected for this target:
//! NEON's `F32x4` on AArch64, the portable `Lanes<4>` everywhere else (or when
//! the `portable` feature is on).

#[cfg(neon)]
pub mod neon;

pub mod blocks;
pub mod portable;
pub mod traits;

pub use blocks::{Blocks, SequentialScan};
pub use portable::Lanes;
pub use traits::SimdVec;

/// The vector type the kernels use by default on this target.
#[cfg(neon)]
pub type Native = neon::f32x4::F32x4;

/// The vector type the kernels use by default on this target.
#[cfg(not(neon))]
pub type Native = portable::F32x4;

/// Name of the backend behind [`Native`].
pub const BACKEND: &str = if cfg!(neon) { "neon" } else { "portable" };

//! Vectorized sensor and signal-processing kernels.
//!
//! Every kernel is a stateless function over caller-owned slices. The bulk of
//! the data is processed in blocks of [`LANE_COUNT`] lanes and the remainder
//! with scalar arithmetic. Each kernel comes in three forms:
//!
//! - `name(..)` runs on the target's native vector ([`simd::Native`]),
//! - `name_with::<V>(..)` runs on any [`simd::SimdVec`],
//! - `scalar_name(..)` is the plain sequential reference.
//!
//! ```
//! use sigsimd::signal::{cumulative_sum, min_index, weighted_average};
//!
//! let mut sums = [0.0f32; 5];
//! cumulative_sum(&[1.0, 2.0, 3.0, 4.0, 5.0], &mut sums).unwrap();
//! assert_eq!(sums, [1.0, 3.0, 6.0, 10.0, 15.0]);
//!
//! assert_eq!(min_index(&[5.0, 3.0, 3.0, 1.0, 1.0]), 3);
//! assert_eq!(weighted_average(&[2.0, 4.0], &[1.0, 1.0]).unwrap(), 3.0);
//! ```

pub mod error;
pub mod signal;
pub mod simd;

pub use error::{Result, SignalError};

/// Lanes in the native vector.
pub const LANE_COUNT: usize = <simd::Native as simd::SimdVec>::LANES;

//! The kernel catalog.
//!
//! Each kernel is independent of the others. Kernels that take several slices
//! check that their lengths agree and return [`crate::SignalError`] before
//! writing anything; beyond that no kernel fails. Empty inputs, zero weights
//! and zero windows follow the policy documented on the kernel itself.

pub mod average;
pub mod correlation;
pub mod cumulative;
pub mod distance;
pub mod filter;
pub mod search;
pub mod speed;
pub mod threshold;

pub use average::{scalar_weighted_average, weighted_average, weighted_average_with};
pub use correlation::{cross_correlation, cross_correlation_with, scalar_cross_correlation};
pub use cumulative::{cumulative_sum, cumulative_sum_with, scalar_cumulative_sum};
pub use distance::{
    distance_squared, pairwise_distance_squared, pairwise_distance_squared_with,
    scalar_pairwise_distance_squared,
};
pub use filter::{
    exp_moving_average, moving_average, moving_average_with, scalar_exp_moving_average,
    scalar_moving_average,
};
pub use search::{min_index, min_index_with, scalar_min_index, try_min_index, try_min_index_with};
pub use speed::{scalar_speed, speed, speed_with};
pub use threshold::{scalar_threshold_detection, threshold_detection, threshold_detection_with};

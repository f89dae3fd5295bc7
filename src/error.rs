//! Error types for sigsimd kernels.
//!
//! The kernels themselves never fail on numeric grounds: empty inputs, zero
//! weights and zero windows are handled by the policies documented on each
//! kernel. The only thing that can go wrong at the slice boundary is a caller
//! handing over buffers of different lengths, which is reported here before
//! anything is written.

use std::fmt;

/// Errors that can occur when calling a sigsimd kernel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    /// Two slices that must describe the same samples have different lengths.
    LengthMismatch {
        /// Name of the offending argument.
        operand: &'static str,
        /// Length of the leading slice.
        expected: usize,
        /// Length of the offending slice.
        actual: usize,
    },
}

impl fmt::Display for SignalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalError::LengthMismatch {
                operand,
                expected,
                actual,
            } => write!(
                f,
                "Length mismatch: `{}` has {} elements, expected {}",
                operand, actual, expected
            ),
        }
    }
}

impl std::error::Error for SignalError {}

/// Result type alias for sigsimd operations.
pub type Result<T> = std::result::Result<T, SignalError>;

/// Creates a length mismatch error.
pub fn length_mismatch(operand: &'static str, expected: usize, actual: usize) -> SignalError {
    SignalError::LengthMismatch {
        operand,
        expected,
        actual,
    }
}

/// Fails with [`SignalError::LengthMismatch`] unless `actual == expected`.
#[inline(always)]
pub(crate) fn check_len(operand: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(length_mismatch(operand, expected, actual))
    }
}

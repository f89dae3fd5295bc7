//! The two loop shapes shared by every kernel.
//!
//! [`Blocks`] is the embarrassingly parallel shape: each full block of lanes is
//! independent, and whatever is left over goes through a scalar tail loop.
//! Reductions, elementwise maps and comparisons all use it.
//!
//! [`SequentialScan`] is the order-preserving shape used by recurrences such as
//! running sums and exponential smoothing. A carry is threaded from one block
//! to the next and nothing is ever reassociated across the sequence, so it must
//! not be swapped for [`Blocks`] even though both walk the data in blocks.

use std::ops::Range;

/// Full-block / tail split of `len` elements for a given lane width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Blocks {
    len: usize,
    lanes: usize,
}

impl Blocks {
    /// # Panics
    ///
    /// Panics if `lanes` is zero.
    #[inline(always)]
    pub fn new(len: usize, lanes: usize) -> Self {
        assert!(lanes > 0, "Lane count can't be zero");
        Self { len, lanes }
    }

    /// Number of elements covered by full blocks.
    #[inline(always)]
    pub fn bulk_len(&self) -> usize {
        self.len - self.len % self.lanes
    }

    /// Start offsets of the full blocks.
    #[inline(always)]
    pub fn starts(&self) -> impl Iterator<Item = usize> {
        (0..self.bulk_len()).step_by(self.lanes)
    }

    /// Indices handled by the scalar remainder loop.
    #[inline(always)]
    pub fn tail(&self) -> Range<usize> {
        self.bulk_len()..self.len
    }
}

/// Carry-threaded walk over an output buffer.
///
/// Index 0 is seeded directly. Indices `1..len` are then visited in order,
/// in full blocks of `lanes` where a block step is available, with every
/// remaining index going through the scalar step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequentialScan {
    len: usize,
    lanes: usize,
}

impl SequentialScan {
    /// # Panics
    ///
    /// Panics if `lanes` is zero.
    #[inline(always)]
    pub fn new(len: usize, lanes: usize) -> Self {
        assert!(lanes > 0, "Lane count can't be zero");
        Self { len, lanes }
    }

    /// Runs the scan with a block step.
    ///
    /// `block(start, carry, out)` fills `out` (exactly `lanes` slots starting at
    /// `start`) and returns the new carry, which must be the value written to the
    /// last slot. `step(index, carry)` returns the value for one tail slot.
    ///
    /// Does nothing when `len` is zero.
    pub fn run<B, S>(&self, output: &mut [f32], first: f32, mut block: B, step: S)
    where
        B: FnMut(usize, f32, &mut [f32]) -> f32,
        S: FnMut(usize, f32) -> f32,
    {
        if self.len == 0 {
            return;
        }

        output[0] = first;
        let mut carry = first;
        let mut i = 1;

        while self.len - i >= self.lanes {
            carry = block(i, carry, &mut output[i..i + self.lanes]);
            i += self.lanes;
        }

        Self::finish(output, i..self.len, carry, step);
    }

    /// Runs the scan one element at a time. For recurrences where each output
    /// feeds the very next one and no block formulation exists.
    pub fn run_scalar<S>(&self, output: &mut [f32], first: f32, step: S)
    where
        S: FnMut(usize, f32) -> f32,
    {
        if self.len == 0 {
            return;
        }

        output[0] = first;
        Self::finish(output, 1..self.len, first, step);
    }

    #[inline(always)]
    fn finish<S>(output: &mut [f32], range: Range<usize>, mut carry: f32, mut step: S)
    where
        S: FnMut(usize, f32) -> f32,
    {
        for j in range {
            carry = step(j, carry);
            output[j] = carry;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_split() {
        let blocks = Blocks::new(11, 4);
        assert_eq!(blocks.bulk_len(), 8);
        assert_eq!(blocks.starts().collect::<Vec<_>>(), vec![0, 4]);
        assert_eq!(blocks.tail(), 8..11);
    }

    #[test]
    fn test_blocks_shorter_than_one_lane() {
        let blocks = Blocks::new(3, 4);
        assert_eq!(blocks.bulk_len(), 0);
        assert_eq!(blocks.starts().count(), 0);
        assert_eq!(blocks.tail(), 0..3);
    }

    #[test]
    fn test_blocks_empty() {
        let blocks = Blocks::new(0, 4);
        assert_eq!(blocks.starts().count(), 0);
        assert!(blocks.tail().is_empty());
    }

    #[test]
    #[should_panic(expected = "Lane count can't be zero")]
    fn test_blocks_zero_lanes() {
        Blocks::new(4, 0);
    }

    #[test]
    fn test_scan_visits_blocks_then_tail() {
        // len 10 with 4 lanes: seed at 0, blocks at 1 and 5, tail 9
        let mut output = [0.0f32; 10];
        let mut block_starts = Vec::new();
        let mut tail = Vec::new();

        SequentialScan::new(10, 4).run(
            &mut output,
            -1.0,
            |start, carry, out| {
                block_starts.push(start);
                assert_eq!(out.len(), 4);
                out.fill(carry + 1.0);
                carry + 1.0
            },
            |index, carry| {
                tail.push(index);
                carry + 10.0
            },
        );

        assert_eq!(block_starts, vec![1, 5]);
        assert_eq!(tail, vec![9]);
        assert_eq!(
            output,
            [-1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 11.0]
        );
    }

    #[test]
    fn test_scan_empty_writes_nothing() {
        let mut output: [f32; 0] = [];
        SequentialScan::new(0, 4).run(
            &mut output,
            1.0,
            |_, _, _| panic!("no block expected"),
            |_, _| panic!("no step expected"),
        );
        SequentialScan::new(0, 1).run_scalar(&mut output, 1.0, |_, _| {
            panic!("no step expected")
        });
    }

    #[test]
    fn test_run_scalar_threads_carry() {
        let mut output = [0.0f32; 4];
        SequentialScan::new(4, 4).run_scalar(&mut output, 1.0, |_, carry| carry * 2.0);
        assert_eq!(output, [1.0, 2.0, 4.0, 8.0]);
    }
}

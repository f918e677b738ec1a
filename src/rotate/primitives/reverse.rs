//! In-place reversal of a contiguous subrange.

use crate::error::RotationError;

/// Reverse the elements of `seq` in the half-open range `[start, end)`.
///
/// Walks two indices inward from both ends, swapping until they meet or
/// cross. An empty range (`start == end`) is a no-op.
///
/// Returns `OutOfBounds` without touching `seq` if `start > end` or
/// `end > seq.len()`.
pub fn reverse_subset<T>(seq: &mut [T], start: usize, end: usize) -> Result<(), RotationError> {
    if start > end || end > seq.len() {
        return Err(RotationError::OutOfBounds {
            start,
            end,
            len: seq.len(),
        });
    }
    if end - start < 2 {
        return Ok(());
    }

    let mut lo = start;
    let mut hi = end - 1;
    while lo < hi {
        seq.swap(lo, hi);
        lo += 1;
        hi -= 1;
    }
    return Ok(());
}

//! The `Rotate` trait abstracts over the rotation methods.
//!
//! All four methods implement it, enabling:
//! - Conformance testing with one shared test suite
//! - Benchmarking the methods against each other
//! - Swapping methods without touching call sites

use crate::error::RotationError;
use crate::rotate::Method;
use crate::rotate::normalize_offset;

/// An in-place left rotation strategy.
///
/// Implementors provide `rotate`, which applies the method's own
/// preconditions and reports inputs it cannot handle. `rotate_left` wraps
/// it with offset normalization and never fails for any sequence and
/// offset.
///
/// Every implementation must satisfy, for a rotation by `k` of a sequence
/// of length `n`:
/// - `output[i] == input[(i + k) mod n]`
/// - The multiset of elements is unchanged
/// - On error, the sequence is left untouched
pub trait Rotate {
    /// Which method this is.
    fn method(&self) -> Method;

    /// Left-rotate `seq` by `offset`, enforcing this method's preconditions.
    fn rotate<T: Copy>(&self, seq: &mut [T], offset: usize) -> Result<(), RotationError>;

    /// Left-rotate `seq` by `offset mod seq.len()`.
    ///
    /// Sequences shorter than two elements and offsets that reduce to zero
    /// are returned unchanged without invoking the method.
    fn rotate_left<T: Copy>(&self, seq: &mut [T], offset: usize) -> Result<(), RotationError> {
        let Some(offset) = normalize_offset(seq.len(), offset) else {
            return Ok(());
        };
        return self.rotate(seq, offset);
    }

    /// Get the method's display name.
    fn name(&self) -> &'static str {
        return self.method().name();
    }
}

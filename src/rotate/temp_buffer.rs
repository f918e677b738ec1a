//! Rotation through a scratch buffer.
//!
//! The first `offset` elements are parked in a scratch buffer, the tail is
//! shifted down to the front, and the parked elements are written back at
//! the end:
//!
//! ```text
//! offset = 2
//! [1 2 | 3 4 5 6 7]    scratch = [1 2]
//! [3 4 5 6 7 6 7]      shift [2, 7) down by 2
//! [3 4 5 6 7 | 1 2]    restore scratch at the tail
//! ```
//!
//! O(n) time, O(offset) extra space. The scratch buffer lives on the stack
//! for offsets up to `INLINE_SCRATCH` and spills to the heap beyond that.

use smallvec::SmallVec;

use crate::error::RotationError;
use crate::rotate::Method;
use crate::rotate::rotate_trait::Rotate;

/// Number of elements the scratch buffer holds before it allocates.
pub const INLINE_SCRATCH: usize = 8;

/// Left-rotate `seq` by `offset` using an `offset`-sized scratch buffer.
///
/// Requires `seq.len() >= 2` and `offset < seq.len()`.
pub fn rotate<T: Copy>(seq: &mut [T], offset: usize) -> Result<(), RotationError> {
    let len = seq.len();
    if len < 2 {
        tracing::debug!(len, "temp buffer rotation needs two elements");
        return Err(RotationError::SequenceTooShort { len, min: 2 });
    }
    if offset >= len {
        tracing::debug!(len, offset, "temp buffer rotation offset out of range");
        return Err(RotationError::InvalidOffset { offset, len });
    }

    let scratch: SmallVec<[T; INLINE_SCRATCH]> = SmallVec::from_slice(&seq[..offset]);
    seq.copy_within(offset.., 0);
    seq[len - offset..].copy_from_slice(&scratch);
    return Ok(());
}

/// The scratch buffer method as a `Rotate` implementor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TempBuffer;

impl Rotate for TempBuffer {
    fn method(&self) -> Method {
        return Method::TempBuffer;
    }

    fn rotate<T: Copy>(&self, seq: &mut [T], offset: usize) -> Result<(), RotationError> {
        return rotate(seq, offset);
    }
}

//! The reversal rotation.
//!
//! Write the sequence as `A B` where `A` is the first `offset` elements.
//! Reversing both halves gives `A' B'`, and reversing the whole gives
//! `(A' B')' = B A`, which is the left rotation by `offset`.
//!
//! ```text
//! offset = 2
//! [1 2 | 3 4 5 6 7]
//! [2 1 | 3 4 5 6 7]    reverse A
//! [2 1 | 7 6 5 4 3]    reverse B
//! [3 4 5 6 7 | 1 2]    reverse all
//! ```
//!
//! O(n) time across the three passes, O(1) extra space.

use crate::error::RotationError;
use crate::rotate::Method;
use crate::rotate::primitives::reverse_subset;
use crate::rotate::rotate_trait::Rotate;

/// Left-rotate `seq` by `offset` with three reversals.
///
/// Requires `offset <= seq.len()`; `offset == len` is the identity.
pub fn rotate<T>(seq: &mut [T], offset: usize) -> Result<(), RotationError> {
    let len = seq.len();
    if offset > len {
        tracing::debug!(len, offset, "reversal rotation offset out of range");
        return Err(RotationError::InvalidOffset { offset, len });
    }

    reverse_subset(seq, 0, offset)?;
    reverse_subset(seq, offset, len)?;
    reverse_subset(seq, 0, len)?;
    return Ok(());
}

/// The reversal method as a `Rotate` implementor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reversal;

impl Rotate for Reversal {
    fn method(&self) -> Method {
        return Method::Reversal;
    }

    fn rotate<T: Copy>(&self, seq: &mut [T], offset: usize) -> Result<(), RotationError> {
        return rotate(seq, offset);
    }
}

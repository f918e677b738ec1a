//! Rotation by repeated single-step shifts.
//!
//! Each step takes the front element off, slides everything else one
//! position to the left, and puts the front element at the end. The step is
//! repeated `offset` times.
//!
//! O(offset * n) time, O(1) extra space. Wins over the other methods only
//! when `offset` is tiny compared to `n`.

use crate::error::RotationError;
use crate::rotate::Method;
use crate::rotate::rotate_trait::Rotate;

/// Left-rotate `seq` by `offset` one position at a time.
///
/// Requires `seq.len() >= 2`. Offsets of `len` or more are accepted and
/// wrap around whole cycles; every step is still performed.
pub fn rotate<T: Copy>(seq: &mut [T], offset: usize) -> Result<(), RotationError> {
    let len = seq.len();
    if len < 2 {
        tracing::debug!(len, "cyclic shift rotation needs two elements");
        return Err(RotationError::SequenceTooShort { len, min: 2 });
    }

    for _ in 0..offset {
        shift_left_once(seq);
    }
    return Ok(());
}

/// Rotate left by exactly one position.
#[inline]
fn shift_left_once<T: Copy>(seq: &mut [T]) {
    let len = seq.len();
    let front = seq[0];
    for j in 1..len {
        seq[j - 1] = seq[j];
    }
    seq[len - 1] = front;
}

/// The single-step method as a `Rotate` implementor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CyclicShift;

impl Rotate for CyclicShift {
    fn method(&self) -> Method {
        return Method::CyclicShift;
    }

    fn rotate<T: Copy>(&self, seq: &mut [T], offset: usize) -> Result<(), RotationError> {
        return rotate(seq, offset);
    }
}

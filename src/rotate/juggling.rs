//! The juggling rotation.
//!
//! Rotating `n` elements left by `k` moves index `j` to `j - k`, so reading
//! the permutation backwards every index `j` is filled from `(j + k) mod n`.
//! Following that map from any start index traces a cycle, and the indices
//! split into exactly `gcd(k, n)` disjoint cycles of `n / gcd(k, n)` each.
//! Walking every cycle once, with a single saved element per cycle, rotates
//! the whole sequence.
//!
//! ```text
//! n = 6, k = 2, gcd = 2
//! cycle 0: 0 <- 2 <- 4 <- 0
//! cycle 1: 1 <- 3 <- 5 <- 1
//! ```
//!
//! O(n) time, O(1) extra space, and each element is written exactly once.

use crate::error::RotationError;
use crate::rotate::Method;
use crate::rotate::primitives::gcd;
use crate::rotate::rotate_trait::Rotate;

/// Left-rotate `seq` by `offset` by walking its rotation cycles.
///
/// Never fails. Offsets of `len` or more are taken modulo `len`; a zero
/// step or an empty sequence gives `gcd == 0` and so no cycles.
pub fn rotate<T: Copy>(seq: &mut [T], offset: usize) -> Result<(), RotationError> {
    let len = seq.len();
    let offset = if len == 0 { 0 } else { offset % len };
    let cycles = gcd(offset, len);

    for start in 0..cycles {
        let saved = seq[start];
        let mut j = start;
        loop {
            let next = (j + offset) % len;
            if next == start {
                break;
            }
            seq[j] = seq[next];
            j = next;
        }
        seq[j] = saved;
    }
    return Ok(());
}

/// The juggling method as a `Rotate` implementor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Juggling;

impl Rotate for Juggling {
    fn method(&self) -> Method {
        return Method::Juggling;
    }

    fn rotate<T: Copy>(&self, seq: &mut [T], offset: usize) -> Result<(), RotationError> {
        return rotate(seq, offset);
    }
}

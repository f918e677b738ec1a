//! In-place left rotation of a sequence.
//!
//! Four interchangeable methods, each with a different time/space tradeoff:
//!
//! | Method | Time | Extra space |
//! |--------|------|-------------|
//! | `TempBuffer` | O(n) | O(offset) |
//! | `CyclicShift` | O(offset * n) | O(1) |
//! | `Juggling` | O(n) | O(1) |
//! | `Reversal` | O(n) | O(1) |
//!
//! Use `rotate_left` to pick a method at runtime, or call a method's
//! `rotate` directly to get its strict preconditions.

use std::fmt;
use std::str::FromStr;

use crate::error::{ParseMethodError, RotationError};

pub mod cyclic_shift;
pub mod juggling;
pub mod primitives;
pub mod reversal;
pub mod rotate_trait;
pub mod temp_buffer;

pub use cyclic_shift::CyclicShift;
pub use juggling::Juggling;
pub use reversal::Reversal;
pub use rotate_trait::Rotate;
pub use temp_buffer::TempBuffer;

/// Selects one of the rotation methods.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    /// Park the first `offset` elements in a scratch buffer.
    TempBuffer,
    /// Shift left by one position, `offset` times.
    CyclicShift,
    /// Walk the `gcd(offset, len)` rotation cycles.
    Juggling,
    /// Reverse both halves, then the whole.
    Reversal,
}

impl Method {
    /// Every method, in the order they are usually presented.
    pub const ALL: [Method; 4] = [
        Method::TempBuffer,
        Method::CyclicShift,
        Method::Juggling,
        Method::Reversal,
    ];

    /// Stable kebab-case name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        return match self {
            Method::TempBuffer => "temp-buffer",
            Method::CyclicShift => "cyclic-shift",
            Method::Juggling => "juggling",
            Method::Reversal => "reversal",
        };
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(self.name());
    }
}

impl FromStr for Method {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        for method in Method::ALL {
            if method.name() == normalized {
                return Ok(method);
            }
        }
        return Err(ParseMethodError(s.to_string()));
    }
}

/// Reduce `offset` modulo `len`.
///
/// Returns `None` when the rotation is a no-op: fewer than two elements,
/// or an offset that is a multiple of `len`.
pub fn normalize_offset(len: usize, offset: usize) -> Option<usize> {
    if len < 2 {
        return None;
    }
    let offset = offset % len;
    if offset == 0 {
        return None;
    }
    return Some(offset);
}

/// Left-rotate `seq` by `offset` positions using `method`.
///
/// The offset is taken modulo `seq.len()`, and sequences shorter than two
/// elements are left as they are, so every method's preconditions hold
/// by the time it runs.
///
/// ```
/// use rotation::{rotate_left, Method};
///
/// let mut seq = [1, 2, 3, 4, 5, 6, 7];
/// rotate_left(&mut seq, 2, Method::Juggling).unwrap();
/// assert_eq!(seq, [3, 4, 5, 6, 7, 1, 2]);
/// ```
pub fn rotate_left<T: Copy>(seq: &mut [T], offset: usize, method: Method) -> Result<(), RotationError> {
    tracing::trace!(%method, len = seq.len(), offset, "rotate left");
    return match method {
        Method::TempBuffer => TempBuffer.rotate_left(seq, offset),
        Method::CyclicShift => CyclicShift.rotate_left(seq, offset),
        Method::Juggling => Juggling.rotate_left(seq, offset),
        Method::Reversal => Reversal.rotate_left(seq, offset),
    };
}

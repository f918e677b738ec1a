//! Rotation - in-place left rotation of fixed-length sequences.
//!
//! Four methods with different time/space tradeoffs, all mutating the
//! caller's slice in place:
//!
//! - `TempBuffer`: park the first `offset` elements, shift, restore
//! - `CyclicShift`: single-step left shift, repeated `offset` times
//! - `Juggling`: walk the `gcd(offset, len)` rotation cycles
//! - `Reversal`: reverse both halves, then the whole
//!
//! # Quick Start
//!
//! ```
//! use rotation::{rotate_left, Listing, Method};
//!
//! let mut seq = [1, 2, 3, 4, 5, 6, 7];
//! rotate_left(&mut seq, 2, Method::Reversal).unwrap();
//! assert_eq!(seq, [3, 4, 5, 6, 7, 1, 2]);
//!
//! print!("{}", Listing(&seq));
//! ```
//!
//! # Invariants
//!
//! For every method, a rotation by `k` of a sequence of length `n`:
//!
//! - **Placement**: `output[i] == input[(i + k) mod n]`
//! - **Permutation**: the multiset of elements is unchanged
//! - **Atomicity**: a rejected call leaves the sequence untouched
//!
//! These properties are verified by the conformance and property test
//! suites.

pub mod error;
pub mod print;
pub mod rotate;

pub use error::{ParseMethodError, RotationError};
pub use print::{Listing, print_sequence};
pub use rotate::primitives::{gcd, reverse_subset};
pub use rotate::{CyclicShift, Juggling, Method, Reversal, Rotate, TempBuffer, rotate_left};

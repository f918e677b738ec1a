//! Errors reported by the rotation methods.

use thiserror::Error;

/// Error returned when a rotation method rejects its input.
///
/// Every method validates before it writes, so a rotation that returns an
/// error leaves the sequence exactly as it was.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationError {
    /// The offset lies outside the range the method accepts.
    #[error("invalid offset {offset} for a sequence of length {len}")]
    InvalidOffset { offset: usize, len: usize },

    /// The method needs more elements than the sequence holds.
    #[error("sequence of length {len} is too short, need at least {min}")]
    SequenceTooShort { len: usize, min: usize },

    /// A subrange does not fit inside the sequence.
    ///
    /// Only `reverse_subset` reports this; the rotation methods check their
    /// split points first.
    #[error("range {start}..{end} is out of bounds for length {len}")]
    OutOfBounds { start: usize, end: usize, len: usize },
}

/// Error returned when a method name does not match any rotation method.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown rotation method `{0}`, expected one of: temp-buffer, cyclic-shift, juggling, reversal")]
pub struct ParseMethodError(pub String);

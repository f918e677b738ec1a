//! Leaf helpers shared by the rotation methods.
//!
//! - `gcd`: subtraction-based greatest common divisor (juggling)
//! - `reverse_subset`: in-place range reversal (reversal)

pub mod gcd;
pub mod reverse;

// Re-exports for convenience
pub use gcd::gcd;
pub use reverse::reverse_subset;

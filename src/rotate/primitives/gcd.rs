//! Greatest common divisor by repeated subtraction.
//!
//! This is Euclid's original formulation: while the two values differ,
//! subtract the smaller from the larger. It needs no division, at the cost
//! of O(max(a, b) / min(a, b)) steps in the worst case.
//!
//! # Zero convention
//!
//! `gcd(0, b)` and `gcd(a, 0)` return `0`, not the mathematical `b` / `a`.
//! The juggling rotation depends on this: a zero offset or an empty
//! sequence yields zero cycles, so the rotation does no work.

/// Compute the greatest common divisor of `a` and `b`.
///
/// Returns `0` if either input is `0`. Runs in O(max(a, b) / min(a, b))
/// steps, so widely different inputs (e.g. `gcd(1, usize::MAX)`) are slow;
/// callers should reduce one argument modulo the other first.
pub fn gcd(mut a: usize, mut b: usize) -> usize {
    if a == 0 || b == 0 {
        return 0;
    }
    while a != b {
        if a > b {
            a -= b;
        } else {
            b -= a;
        }
    }
    return a;
}

//! Debug listing of a sequence, one element per line.

use std::fmt;
use std::io::{self, Write};

/// Formats a sequence as `"<index> element: <value>"` lines.
///
/// ```
/// use rotation::Listing;
///
/// let listing = Listing(&[10, 20]).to_string();
/// assert_eq!(listing, "0 element: 10\n1 element: 20\n");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Listing<'a, T>(pub &'a [T]);

impl<T: fmt::Display> fmt::Display for Listing<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            writeln!(f, "{i} element: {value}")?;
        }
        return Ok(());
    }
}

/// Write the listing of `seq` to standard output.
pub fn print_sequence<T: fmt::Display>(seq: &[T]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", Listing(seq))?;
    return out.flush();
}

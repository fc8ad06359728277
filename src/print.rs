//! Rendering sequences as `[ e0 e1 ... ]`

use std::io::Write;

use crate::error::SortError;

/// Write `slice` to `out` as `[ e0 e1 ... ]` followed by a newline
pub fn write_array<T: std::fmt::Display>(
    out: &mut impl Write,
    slice: &[T],
) -> std::io::Result<()> {
    out.write_all(b"[ ")?;
    for element in slice {
        write!(out, "{element} ")?;
    }
    out.write_all(b"]\n")
}

/// Print the first `length` elements of `slice` to stdout
pub fn print_array<T: std::fmt::Display>(slice: &[T], length: usize) -> Result<(), SortError> {
    let slice = crate::error::checked_prefix(slice, length)?;

    let mut out = std::io::BufWriter::new(std::io::stdout().lock());
    write_array(&mut out, slice)?;
    out.flush()?;

    Ok(())
}

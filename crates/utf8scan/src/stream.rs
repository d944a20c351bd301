//! Well-formedness of `std::io` readers.

use std::io::{self, BufRead, BufReader, Read};

use crate::{StreamOptions, source::IoSource, well_formed::is_well_formed_source};

/// Returns whether everything `reader` yields is well-formed UTF-8.
///
/// The reader is wrapped in a [`BufReader`] with the default
/// [`StreamOptions`]; use [`is_well_formed_buffered`] for a reader that is
/// already buffered.
///
/// ```rust
/// # fn main() -> std::io::Result<()> {
/// let file: &[u8] = "plain ascii, then ünïcödé".as_bytes();
/// assert!(utf8scan::is_well_formed_reader(file)?);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// The first I/O error of `reader`, unchanged.
pub fn is_well_formed_reader<R: Read>(reader: R) -> io::Result<bool> {
    is_well_formed_reader_with(reader, StreamOptions::default())
}

/// Like [`is_well_formed_reader`], with explicit buffering options.
///
/// # Errors
///
/// The first I/O error of `reader`, unchanged.
pub fn is_well_formed_reader_with<R: Read>(reader: R, options: StreamOptions) -> io::Result<bool> {
    let capacity = options.buffer_capacity.max(1);
    is_well_formed_buffered(BufReader::with_capacity(capacity, reader))
}

/// Returns whether everything `reader` yields is well-formed UTF-8, reading
/// through its own buffer.
///
/// Reading stops at the first ill-formed sequence; pass `&mut reader` to
/// keep using the reader afterwards.
///
/// # Errors
///
/// The first I/O error of `reader`, unchanged.
pub fn is_well_formed_buffered<R: BufRead>(reader: R) -> io::Result<bool> {
    is_well_formed_source(&mut IoSource::new(reader))
}

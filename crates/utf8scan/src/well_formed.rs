//! Strict UTF-8 well-formedness, as in Unicode 6.0 section 3.9 (D92).
//!
//! Well-formed means "exactly what an encoder would produce": non-shortest
//! (overlong) forms, encoded surrogates and anything above U+10FFFF are all
//! rejected, even where a lenient decoder would accept them.
//!
//! ```text
//! UTF8-1 = %x00-7F
//! UTF8-2 = %xC2-DF UTF8-tail
//! UTF8-3 = %xE0 %xA0-BF UTF8-tail / %xE1-EC 2( UTF8-tail ) /
//!          %xED %x80-9F UTF8-tail / %xEE-EF 2( UTF8-tail )
//! UTF8-4 = %xF0 %x90-BF 2( UTF8-tail ) / %xF1-F3 3( UTF8-tail ) /
//!          %xF4 %x80-8F 2( UTF8-tail )
//! ```

use bstr::ByteSlice;

use crate::{
    Utf8Error,
    bounds::check_window,
    consts::{
        MAX_FOUR_BYTE_LEAD, MIN_FOUR_BYTE_LEAD, MIN_SECOND_AFTER_E0, MIN_SURROGATE_SECOND,
        MIN_THREE_BYTE_LEAD, MIN_TWO_BYTE_LEAD, SUPPLEMENTARY_PLANES, SURROGATE_LEAD,
        is_trailing,
    },
    source::{ByteSource, SliceSource},
};

/// Returns whether `bytes` is well-formed UTF-8.
///
/// Agrees with [`core::str::from_utf8`] on every input.
///
/// ```rust
/// use utf8scan::is_well_formed;
///
/// assert!(is_well_formed("κόσμε".as_bytes()));
/// assert!(!is_well_formed(&[0xC0, 0x80])); // overlong NUL
/// assert!(!is_well_formed(&[0xED, 0xA0, 0x80])); // U+D800
/// ```
#[must_use]
pub fn is_well_formed(bytes: &[u8]) -> bool {
    match bytes.find_non_ascii_byte() {
        None => true,
        Some(first) => check_non_ascii_tail(bytes, first),
    }
}

/// Returns whether `bytes[offset..offset + len]` is well-formed UTF-8.
///
/// Only the window is examined. A sequence that is cut off by the end of the
/// window is ill-formed even if the buffer continues it.
///
/// # Errors
///
/// [`Utf8Error::IndexOutOfRange`] if the window does not lie within
/// `bytes`; nothing is scanned in that case.
pub fn is_well_formed_range(bytes: &[u8], offset: usize, len: usize) -> Result<bool, Utf8Error> {
    let window = check_window(offset, len, bytes.len())?;
    Ok(is_well_formed(&bytes[window]))
}

/// Runs the state machine over `bytes[first..]`, where `bytes[first]` is
/// the first non-ASCII byte.
fn check_non_ascii_tail(bytes: &[u8], first: usize) -> bool {
    let mut source = SliceSource::new(&bytes[first..]);
    let Ok(well_formed) = is_well_formed_source(&mut source);
    if !well_formed {
        trace_event!(
            consumed = bytes.len() - source.remaining().len(),
            "ill-formed UTF-8"
        );
    }
    well_formed
}

/// Returns whether everything `source` yields, up to its end, is well-formed
/// UTF-8.
///
/// Bytes are pulled lazily and the check stops at the first ill-formed
/// sequence, leaving the rest of the source unread.
///
/// # Errors
///
/// The first read error of `source`, unchanged. Ill-formed input is reported
/// as `Ok(false)`, not as an error.
pub fn is_well_formed_source<S: ByteSource + ?Sized>(source: &mut S) -> Result<bool, S::Error> {
    let mut sequence = [0u8; 4];
    while let Some(lead) = source.next_non_ascii()? {
        let width = match lead {
            MIN_TWO_BYTE_LEAD..MIN_THREE_BYTE_LEAD => 2,
            MIN_THREE_BYTE_LEAD..MIN_FOUR_BYTE_LEAD => 3,
            MIN_FOUR_BYTE_LEAD..=MAX_FOUR_BYTE_LEAD => 4,
            // Trailing byte in lead position, overlong 2-byte lead, or a lead
            // past U+10FFFF.
            _ => return Ok(false),
        };
        sequence[0] = lead;
        if !fill(source, &mut sequence[1..width])? {
            // Truncated by the end of input.
            return Ok(false);
        }
        if !is_valid_sequence(&sequence[..width]) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Fills `buf` completely, tolerating short reads. `Ok(false)` if the source
/// ends first.
fn fill<S: ByteSource + ?Sized>(source: &mut S, mut buf: &mut [u8]) -> Result<bool, S::Error> {
    while !buf.is_empty() {
        match source.read_bytes(buf)? {
            0 => return Ok(false),
            n => buf = &mut buf[n..],
        }
    }
    Ok(true)
}

/// Validates a complete multi-byte sequence whose lead byte already selected
/// its width.
#[inline]
fn is_valid_sequence(sequence: &[u8]) -> bool {
    match *sequence {
        [_, second] => is_trailing(second),
        [lead, second, third] => {
            is_trailing(second)
                && !(lead == MIN_THREE_BYTE_LEAD && second < MIN_SECOND_AFTER_E0)
                && !(lead == SURROGATE_LEAD && second >= MIN_SURROGATE_SECOND)
                && is_trailing(third)
        }
        [lead, second, third, fourth] => {
            is_trailing(second)
                && SUPPLEMENTARY_PLANES.contains(&plane(lead, second))
                && is_trailing(third)
                && is_trailing(fourth)
        }
        _ => false,
    }
}

/// Unicode plane encoded by a 4-byte lead and its second byte: the lead's
/// three payload bits followed by the top two payload bits of the second.
#[inline(always)]
fn plane(lead: u8, second: u8) -> u8 {
    ((lead & 0b0000_0111) << 2) | ((second & 0b0011_0000) >> 4)
}

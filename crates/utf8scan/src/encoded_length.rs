//! UTF-8 length of UTF-16 text, computed without encoding it.
//!
//! Every code unit is first counted as one byte; the scan then adds what the
//! unit needs on top of that:
//!
//! | code unit                  | UTF-8 bytes | added |
//! |----------------------------|-------------|-------|
//! | `0x0000..=0x007F`          | 1           | 0     |
//! | `0x0080..=0x07FF`          | 2           | 1     |
//! | `0x0800..=0xFFFF`          | 3           | 2     |
//! | surrogate pair (two units) | 4           | 2     |
//!
//! A surrogate that is not part of a high/low pair has no UTF-8 encoding and
//! fails the whole estimate.

use crate::{
    LengthOptions, Utf8Error,
    consts::{MAX_ONE_BYTE_UNIT, MIN_THREE_BYTE_UNIT, SURROGATES},
};

/// Returns the number of bytes `units` occupies when encoded as UTF-8.
///
/// For text that came from a `&str`, this is the `str`'s own length:
///
/// ```rust
/// let text = "a€😀";
/// let units: Vec<u16> = text.encode_utf16().collect();
/// assert_eq!(utf8scan::encoded_length(&units), Ok(text.len()));
/// ```
///
/// # Errors
///
/// - [`Utf8Error::MalformedInput`] if `units` contains an unpaired
///   surrogate.
/// - [`Utf8Error::LengthOverflow`] if the length exceeds `isize::MAX`.
#[inline]
pub fn encoded_length(units: &[u16]) -> Result<usize, Utf8Error> {
    encoded_length_with(units, LengthOptions::default())
}

/// Like [`encoded_length`], but with a caller-chosen upper bound.
///
/// # Errors
///
/// - [`Utf8Error::MalformedInput`] if `units` contains an unpaired
///   surrogate.
/// - [`Utf8Error::LengthOverflow`] if the length exceeds
///   `options.max_encoded_length`.
pub fn encoded_length_with(units: &[u16], options: LengthOptions) -> Result<usize, Utf8Error> {
    // Pure ASCII prefix.
    let start = units
        .iter()
        .position(|&unit| unit > MAX_ONE_BYTE_UNIT)
        .unwrap_or(units.len());

    let mut extra = 0u64;
    for (i, &unit) in units.iter().enumerate().skip(start) {
        if unit < MIN_THREE_BYTE_UNIT {
            extra += two_byte_increment(unit);
        } else {
            extra += encoded_length_general(units, i)?;
            break;
        }
    }

    // At most 3 bytes per unit, so the sum cannot wrap a u64.
    let computed = units.len() as u64 + extra;
    fit_length(computed, options.max_encoded_length)
}

/// Extra bytes for the code units from `start` on, with surrogate pairs.
fn encoded_length_general(units: &[u16], start: usize) -> Result<u64, Utf8Error> {
    let mut extra = 0u64;
    let mut i = start;
    while i < units.len() {
        let unit = units[i];
        if unit < MIN_THREE_BYTE_UNIT {
            extra += two_byte_increment(unit);
        } else {
            extra += 2;
            if SURROGATES.contains(&unit) {
                if !starts_surrogate_pair(&units[i..]) {
                    trace_event!(index = i, unit, "unpaired surrogate");
                    return Err(Utf8Error::MalformedInput { index: i });
                }
                // The low half is covered by the +2 above.
                i += 1;
            }
        }
        i += 1;
    }
    Ok(extra)
}

/// 1 for `0x80..=0x7FF`, 0 for ASCII, for any `unit < 0x800`.
///
/// `0x7F - unit` wraps around, setting the top bit, exactly when the unit is
/// above `0x7F`.
#[inline(always)]
fn two_byte_increment(unit: u16) -> u64 {
    u64::from(MAX_ONE_BYTE_UNIT.wrapping_sub(unit) >> 15)
}

/// Whether `units` begins with a high surrogate followed by a low surrogate.
#[inline]
fn starts_surrogate_pair(units: &[u16]) -> bool {
    matches!(char::decode_utf16(units.iter().copied()).next(), Some(Ok(_)))
}

fn fit_length(computed: u64, limit: usize) -> Result<usize, Utf8Error> {
    match usize::try_from(computed) {
        Ok(len) if len <= limit => Ok(len),
        _ => {
            trace_event!(computed, limit, "UTF-8 length overflow");
            Err(Utf8Error::LengthOverflow { computed, limit })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_boundaries() {
        assert_eq!(two_byte_increment(0x00), 0);
        assert_eq!(two_byte_increment(0x7F), 0);
        assert_eq!(two_byte_increment(0x80), 1);
        assert_eq!(two_byte_increment(0x7FF), 1);
    }

    #[test]
    fn pair_detection() {
        assert!(starts_surrogate_pair(&[0xD83D, 0xDE00]));
        assert!(starts_surrogate_pair(&[0xDBFF, 0xDFFF, 0x41]));
        assert!(!starts_surrogate_pair(&[0xD83D]));
        assert!(!starts_surrogate_pair(&[0xD83D, 0x41]));
        assert!(!starts_surrogate_pair(&[0xD83D, 0xD83D]));
        assert!(!starts_surrogate_pair(&[0xDE00, 0xD83D]));
    }

    #[test]
    fn limit_is_inclusive() {
        assert_eq!(fit_length(7, 7), Ok(7));
        assert_eq!(
            fit_length(8, 7),
            Err(Utf8Error::LengthOverflow {
                computed: 8,
                limit: 7
            })
        );
    }
}

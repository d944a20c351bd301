//! Code-unit and byte thresholds shared by the length and well-formedness
//! scans.

/// Largest code unit that encodes to a single UTF-8 byte.
pub(crate) const MAX_ONE_BYTE_UNIT: u16 = 0x7F;
/// Smallest code unit that needs three UTF-8 bytes.
pub(crate) const MIN_THREE_BYTE_UNIT: u16 = 0x800;
/// Surrogate code units, high and low halves together.
pub(crate) const SURROGATES: core::ops::RangeInclusive<u16> = 0xD800..=0xDFFF;

/// `0xC0` and `0xC1` can only start overlong 2-byte forms.
pub(crate) const MIN_TWO_BYTE_LEAD: u8 = 0xC2;
pub(crate) const MIN_THREE_BYTE_LEAD: u8 = 0xE0;
pub(crate) const MIN_FOUR_BYTE_LEAD: u8 = 0xF0;
/// `0xF4 0x8F 0xBF 0xBF` is U+10FFFF; anything above is out of range.
pub(crate) const MAX_FOUR_BYTE_LEAD: u8 = 0xF4;

/// After an `0xE0` lead the second byte must be at least this, otherwise the
/// five most significant payload bits are all zero (overlong).
pub(crate) const MIN_SECOND_AFTER_E0: u8 = 0xA0;
/// Lead byte of the 3-byte forms that cover U+D000..=U+DFFF.
pub(crate) const SURROGATE_LEAD: u8 = 0xED;
/// After an `0xED` lead, second bytes from here on encode surrogates.
pub(crate) const MIN_SURROGATE_SECOND: u8 = 0xA0;

/// Supplementary planes a 4-byte form may encode.
pub(crate) const SUPPLEMENTARY_PLANES: core::ops::RangeInclusive<u8> = 1..=16;

/// Whether `byte` has the `10xx_xxxx` shape of a trailing byte
/// (`0x80..=0xBF`).
#[inline(always)]
pub(crate) const fn is_trailing(byte: u8) -> bool {
    byte & 0b1100_0000 == 0b1000_0000
}

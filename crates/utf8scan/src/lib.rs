//! UTF-8 primitives that never decode: the encoded length of UTF-16 text,
//! and strict well-formedness of bytes in memory or from a reader.
//!
//! ```rust
//! use utf8scan::{encoded_length, is_well_formed};
//!
//! let units: Vec<u16> = "naïve 😀".encode_utf16().collect();
//! assert_eq!(encoded_length(&units), Ok("naïve 😀".len()));
//!
//! assert!(is_well_formed("naïve 😀".as_bytes()));
//! assert!(!is_well_formed(&[0xF4, 0x90, 0x80, 0x80])); // above U+10FFFF
//! ```
//!
//! The crate is `no_std`; the `std` feature (on by default) adds checks over
//! [`std::io::Read`] and [`std::io::BufRead`].

#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

/// Emits a `tracing` event at trace level when the `tracing` feature is on,
/// and expands to nothing otherwise.
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
    };
}

mod bounds;
mod consts;
mod encoded_length;
mod error;
mod options;
mod source;
#[cfg(feature = "std")]
mod stream;
mod well_formed;

#[cfg(test)]
mod tests;

pub use bounds::{IndexError, check_position_indexes};
pub use encoded_length::{encoded_length, encoded_length_with};
pub use error::Utf8Error;
#[cfg(feature = "std")]
pub use options::StreamOptions;
pub use options::LengthOptions;
#[cfg(feature = "std")]
pub use source::IoSource;
pub use source::{ByteSource, SliceSource};
#[cfg(feature = "std")]
pub use stream::{is_well_formed_buffered, is_well_formed_reader, is_well_formed_reader_with};
pub use well_formed::{is_well_formed, is_well_formed_range, is_well_formed_source};

use thiserror::Error;

use crate::bounds::IndexError;

/// Failure of a length estimate or of a windowed well-formedness check.
///
/// Ill-formed UTF-8 is not an error: the well-formedness checks report it as
/// `false`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Utf8Error {
    /// The code units contain an unpaired surrogate.
    #[error("unpaired surrogate at index {index}")]
    MalformedInput {
        /// Position of the lone high or low surrogate.
        index: usize,
    },
    /// The UTF-8 length is larger than the configured maximum or than
    /// `usize`.
    #[error("UTF-8 length does not fit in {limit} bytes: {computed}")]
    LengthOverflow {
        /// Length the input would encode to.
        computed: u64,
        /// Maximum that was in effect.
        limit: usize,
    },
    /// The requested window does not lie within the buffer.
    #[error(transparent)]
    IndexOutOfRange(#[from] IndexError),
}

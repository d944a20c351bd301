//! Position checks for `[start, end)` windows into a buffer.

use thiserror::Error;

/// An invalid window into a buffer of `size` bytes.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    /// The window starts past the end of the buffer.
    #[error("start index ({start}) must not be greater than size ({size})")]
    StartOutOfRange {
        /// Requested start.
        start: usize,
        /// Buffer length.
        size: usize,
    },
    /// The window ends past the end of the buffer.
    #[error("end index ({end}) must not be greater than size ({size})")]
    EndOutOfRange {
        /// Requested end (exclusive).
        end: usize,
        /// Buffer length.
        size: usize,
    },
    /// The window ends before it starts.
    #[error("end index ({end}) must not be less than start index ({start})")]
    EndBeforeStart {
        /// Requested start.
        start: usize,
        /// Requested end (exclusive).
        end: usize,
    },
    /// `offset + len` is not representable.
    #[error("window of {len} bytes at offset {offset} overflows usize")]
    WindowOverflow {
        /// Requested offset.
        offset: usize,
        /// Requested length.
        len: usize,
    },
}

/// Checks that `start..end` is a valid window into a buffer of `size`
/// elements, i.e. `start <= end <= size`.
///
/// The start is reported first, then the end, then their order.
///
/// # Errors
///
/// Returns the [`IndexError`] describing the first violated bound.
pub fn check_position_indexes(start: usize, end: usize, size: usize) -> Result<(), IndexError> {
    if start > size {
        return Err(IndexError::StartOutOfRange { start, size });
    }
    if end > size {
        return Err(IndexError::EndOutOfRange { end, size });
    }
    if end < start {
        return Err(IndexError::EndBeforeStart { start, end });
    }
    Ok(())
}

/// Resolves an `offset`/`len` window into `start..end` and checks it.
pub(crate) fn check_window(
    offset: usize,
    len: usize,
    size: usize,
) -> Result<core::ops::Range<usize>, IndexError> {
    let end = offset
        .checked_add(len)
        .ok_or(IndexError::WindowOverflow { offset, len })?;
    check_position_indexes(offset, end, size)?;
    Ok(offset..end)
}

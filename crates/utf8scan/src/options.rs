/// Limits applied by [`encoded_length_with`](crate::encoded_length_with).
///
/// # Examples
///
/// ```rust
/// use utf8scan::{LengthOptions, Utf8Error, encoded_length_with};
///
/// let units: Vec<u16> = "héllo".encode_utf16().collect();
/// let options = LengthOptions {
///     max_encoded_length: 4,
/// };
/// assert_eq!(
///     encoded_length_with(&units, options),
///     Err(Utf8Error::LengthOverflow {
///         computed: 6,
///         limit: 4
///     })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct LengthOptions {
    /// Largest encoded length that is reported as a success.
    ///
    /// Lengths above it fail with
    /// [`Utf8Error::LengthOverflow`](crate::Utf8Error::LengthOverflow).
    ///
    /// # Default
    ///
    /// `isize::MAX`, the largest possible allocation.
    pub max_encoded_length: usize,
}

impl Default for LengthOptions {
    fn default() -> Self {
        Self {
            max_encoded_length: isize::MAX.unsigned_abs(),
        }
    }
}

/// Buffering used when checking an unbuffered [`std::io::Read`].
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct StreamOptions {
    /// Capacity of the `BufReader` wrapped around the reader. Zero is
    /// treated as one.
    ///
    /// # Default
    ///
    /// 8 KiB
    pub buffer_capacity: usize,
}

#[cfg(feature = "std")]
impl Default for StreamOptions {
    fn default() -> Self {
        Self {
            buffer_capacity: 8 * 1024,
        }
    }
}

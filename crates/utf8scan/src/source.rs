//! Byte sources consumed by the streaming well-formedness check.

use core::convert::Infallible;

use bstr::ByteSlice;

/// A sequential source of bytes of unknown total length.
///
/// This is the only thing the streaming check needs from its input: blocking
/// behaviour, buffering and errors all belong to the implementation.
pub trait ByteSource {
    /// Error reported by a failed read. It reaches the caller unchanged.
    type Error;

    /// Reads one or more bytes into the front of `buf` and returns how many
    /// were read. `Ok(0)` means the source is exhausted (or `buf` is empty).
    ///
    /// Short reads are allowed; the returned count must not exceed
    /// `buf.len()`.
    ///
    /// # Errors
    ///
    /// Whatever the underlying source fails with.
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Consumes ASCII bytes up to and including the next non-ASCII byte and
    /// returns that byte, or `None` once the source is exhausted.
    ///
    /// The default reads one byte at a time; sources with a buffer should
    /// scan it in bulk.
    ///
    /// # Errors
    ///
    /// Whatever the underlying source fails with.
    fn next_non_ascii(&mut self) -> Result<Option<u8>, Self::Error> {
        let mut byte = [0u8; 1];
        loop {
            if self.read_bytes(&mut byte)? == 0 {
                return Ok(None);
            }
            if !byte[0].is_ascii() {
                return Ok(Some(byte[0]));
            }
        }
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    type Error = S::Error;

    #[inline]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        (**self).read_bytes(buf)
    }

    #[inline]
    fn next_non_ascii(&mut self) -> Result<Option<u8>, Self::Error> {
        (**self).next_non_ascii()
    }
}

/// An in-memory source over a byte slice. Reads never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SliceSource<'a> {
    bytes: &'a [u8],
}

impl<'a> SliceSource<'a> {
    /// Creates a source yielding exactly `bytes`.
    #[must_use]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// The bytes not read yet.
    #[must_use]
    pub const fn remaining(&self) -> &'a [u8] {
        self.bytes
    }
}

impl ByteSource for SliceSource<'_> {
    type Error = Infallible;

    #[inline]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, Infallible> {
        let n = buf.len().min(self.bytes.len());
        let (head, tail) = self.bytes.split_at(n);
        buf[..n].copy_from_slice(head);
        self.bytes = tail;
        Ok(n)
    }

    #[inline]
    fn next_non_ascii(&mut self) -> Result<Option<u8>, Infallible> {
        let Some(i) = self.bytes.find_non_ascii_byte() else {
            self.bytes = &[];
            return Ok(None);
        };
        let byte = self.bytes[i];
        self.bytes = &self.bytes[i + 1..];
        Ok(Some(byte))
    }
}

/// A source over a [`std::io::BufRead`]. ASCII runs are skipped a whole
/// buffer at a time.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoSource<R> {
    inner: R,
}

#[cfg(feature = "std")]
impl<R: std::io::BufRead> IoSource<R> {
    /// Wraps an already buffered reader.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Returns the reader, positioned after the last byte consumed.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<R: std::io::BufRead> ByteSource for IoSource<R> {
    type Error = std::io::Error;

    #[inline]
    fn read_bytes(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        std::io::Read::read(&mut self.inner, buf)
    }

    fn next_non_ascii(&mut self) -> std::io::Result<Option<u8>> {
        loop {
            let chunk = self.inner.fill_buf()?;
            if chunk.is_empty() {
                return Ok(None);
            }
            if let Some(i) = chunk.find_non_ascii_byte() {
                let byte = chunk[i];
                self.inner.consume(i + 1);
                return Ok(Some(byte));
            }
            let consumed = chunk.len();
            self.inner.consume(consumed);
        }
    }
}

use core::convert::Infallible;
use std::vec::Vec;

use crate::{ByteSource, SliceSource, is_well_formed, is_well_formed_range, is_well_formed_source};

pub(crate) fn utf16(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

/// Hands out its bytes in reads of the given sizes, cycling through them.
/// Zero sizes are read as one so the source always makes progress.
pub(crate) struct ChunkedSource<'a> {
    bytes: &'a [u8],
    sizes: &'a [usize],
    reads: usize,
}

impl<'a> ChunkedSource<'a> {
    pub(crate) fn new(bytes: &'a [u8], sizes: &'a [usize]) -> Self {
        Self {
            bytes,
            sizes,
            reads: 0,
        }
    }
}

impl ByteSource for ChunkedSource<'_> {
    type Error = Infallible;

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, Infallible> {
        let size = if self.sizes.is_empty() {
            buf.len()
        } else {
            self.sizes[self.reads % self.sizes.len()].max(1)
        };
        self.reads += 1;
        let n = size.min(buf.len()).min(self.bytes.len());
        let (head, tail) = self.bytes.split_at(n);
        buf[..n].copy_from_slice(head);
        self.bytes = tail;
        Ok(n)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ReadFailed;

/// Serves `budget` bytes, then fails every read.
pub(crate) struct FailingSource<'a> {
    bytes: &'a [u8],
    budget: usize,
}

impl<'a> FailingSource<'a> {
    pub(crate) fn new(bytes: &'a [u8], budget: usize) -> Self {
        Self { bytes, budget }
    }
}

impl ByteSource for FailingSource<'_> {
    type Error = ReadFailed;

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ReadFailed> {
        if self.budget == 0 {
            return Err(ReadFailed);
        }
        let n = buf.len().min(self.bytes.len()).min(self.budget);
        let (head, tail) = self.bytes.split_at(n);
        buf[..n].copy_from_slice(head);
        self.bytes = tail;
        self.budget -= n;
        Ok(n)
    }
}

/// Checks `bytes` through every entry point, asserts they agree, and returns
/// the common answer.
pub(crate) fn well_formed_everywhere(bytes: &[u8]) -> bool {
    let expected = is_well_formed(bytes);

    assert_eq!(is_well_formed_range(bytes, 0, bytes.len()), Ok(expected));

    let Ok(from_slice_source) = is_well_formed_source(&mut SliceSource::new(bytes));
    assert_eq!(from_slice_source, expected, "slice source: {bytes:02X?}");

    let chunkings: [&[usize]; 4] = [&[1], &[2], &[3], &[1, 2, 3]];
    for sizes in chunkings {
        let Ok(chunked) = is_well_formed_source(&mut ChunkedSource::new(bytes, sizes));
        assert_eq!(chunked, expected, "chunks {sizes:?}: {bytes:02X?}");
    }

    #[cfg(feature = "std")]
    {
        use crate::{StreamOptions, is_well_formed_reader_with};

        for buffer_capacity in [1, 2, 7, 8 * 1024] {
            let streamed =
                is_well_formed_reader_with(bytes, StreamOptions { buffer_capacity }).unwrap();
            assert_eq!(streamed, expected, "capacity {buffer_capacity}: {bytes:02X?}");
        }
    }

    expected
}

pub(crate) fn quickcheck_tests() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

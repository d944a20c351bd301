#![no_main]
use std::convert::Infallible;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utf8scan::{
    ByteSource, StreamOptions, Utf8Error, encoded_length, is_well_formed, is_well_formed_range,
    is_well_formed_reader_with, is_well_formed_source,
};

#[derive(Debug, Arbitrary)]
struct Input {
    bytes: Vec<u8>,
    /// Read sizes for the chunked source, cycled.
    read_sizes: Vec<u8>,
    window: (usize, usize),
    units: Vec<u16>,
}

/// Serves `bytes` in reads of the given sizes.
struct Chunked<'a> {
    bytes: &'a [u8],
    sizes: &'a [u8],
    reads: usize,
}

impl ByteSource for Chunked<'_> {
    type Error = Infallible;

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, Infallible> {
        let size = match self.sizes {
            [] => buf.len(),
            sizes => usize::from(sizes[self.reads % sizes.len()]).max(1),
        };
        self.reads += 1;
        let n = size.min(buf.len()).min(self.bytes.len());
        let (head, tail) = self.bytes.split_at(n);
        buf[..n].copy_from_slice(head);
        self.bytes = tail;
        Ok(n)
    }
}

fn check_well_formed(input: &Input) {
    let bytes = &input.bytes;
    let expected = std::str::from_utf8(bytes).is_ok();
    assert_eq!(is_well_formed(bytes), expected, "slice: {bytes:02X?}");

    let mut chunked = Chunked {
        bytes,
        sizes: &input.read_sizes,
        reads: 0,
    };
    let Ok(streamed) = is_well_formed_source(&mut chunked);
    assert_eq!(streamed, expected, "chunked: {bytes:02X?}");

    let buffer_capacity = input.read_sizes.first().map_or(8 * 1024, |&size| usize::from(size));
    let read = is_well_formed_reader_with(bytes.as_slice(), StreamOptions { buffer_capacity })
        .expect("in-memory reads do not fail");
    assert_eq!(read, expected, "reader: {bytes:02X?}");

    let (offset, len) = input.window;
    match is_well_formed_range(bytes, offset, len) {
        Ok(well_formed) => {
            let window = &bytes[offset..offset + len];
            assert_eq!(well_formed, std::str::from_utf8(window).is_ok());
        }
        Err(Utf8Error::IndexOutOfRange(_)) => {
            assert!(offset.checked_add(len).is_none_or(|end| end > bytes.len()));
        }
        Err(err) => panic!("unexpected error: {err}"),
    }
}

fn check_encoded_length(units: &[u16]) {
    let mut index = 0;
    let mut expected = Ok(0);
    for decoded in char::decode_utf16(units.iter().copied()) {
        match decoded {
            Ok(ch) => {
                index += ch.len_utf16();
                expected = expected.map(|len| len + ch.len_utf8());
            }
            Err(_) => {
                expected = Err(Utf8Error::MalformedInput { index });
                break;
            }
        }
    }
    assert_eq!(encoded_length(units), expected, "units: {units:04X?}");
}

fuzz_target!(|input: Input| {
    check_well_formed(&input);
    check_encoded_length(&input.units);

    let text = String::from_utf8_lossy(&input.bytes);
    let units: Vec<u16> = text.encode_utf16().collect();
    assert_eq!(encoded_length(&units), Ok(text.len()));
});

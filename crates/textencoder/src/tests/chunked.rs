use alloc::{vec, vec::Vec};

use crate::{EncodeIntoResult, EscapedStr, NULL_ESCAPE, UnitWidth, encode, encode_into};

/// Byte offset just past the first `units` logical units of `text`.
pub(crate) fn unit_offset(text: EscapedStr<'_>, units: usize) -> usize {
    let bytes = text.as_bytes();
    let mut pos = 0;
    for _ in 0..units {
        pos += if bytes[pos..].starts_with(&NULL_ESCAPE) {
            NULL_ESCAPE.len()
        } else {
            UnitWidth::of_leading_byte(bytes[pos]).unwrap().bytes()
        };
    }
    pos
}

/// Encodes `text` through repeated `encode_into` calls on a `capacity`-byte
/// buffer, re-slicing the input after each call.
///
/// # Panics
///
/// Panics if `capacity` is too small to make progress.
pub(crate) fn encode_chunked(text: EscapedStr<'_>, capacity: usize) -> Vec<u8> {
    let mut out = Vec::new();
    let mut buf = vec![0u8; capacity];
    let mut rest = text;
    while !rest.is_empty() {
        let EncodeIntoResult { read, written } = encode_into(rest, &mut buf).unwrap();
        assert!(read > 0, "no progress with capacity {capacity}");
        out.extend_from_slice(&buf[..written]);
        rest = rest.tail(unit_offset(rest, read));
    }
    out
}

#[test]
fn chunked_matches_whole() {
    let text = crate::EscapedString::from_text("a\0€😀b\0\0ü");
    let whole = encode(text.as_escaped());
    for capacity in 4..=whole.len() + 1 {
        assert_eq!(encode_chunked(text.as_escaped(), capacity), whole);
    }
}

#[test]
fn offsets_count_escapes_as_four_bytes() {
    let text = crate::EscapedString::from_text("\0é");
    assert_eq!(unit_offset(text.as_escaped(), 0), 0);
    assert_eq!(unit_offset(text.as_escaped(), 1), 4);
    assert_eq!(unit_offset(text.as_escaped(), 2), 6);
}

use bstr::ByteSlice;

use crate::escaped::{EscapedStr, NULL_ESCAPE};

/// Outcome of [`scan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scan {
    /// Exact number of bytes the input encodes to.
    pub len: usize,
    /// Whether at least one [`NULL_ESCAPE`] was found.
    pub has_null_escape: bool,
}

/// Computes the encoded length of `text`.
///
/// Every byte counts as one output byte, except that each [`NULL_ESCAPE`]
/// collapses to a single null. A partial escape at the end of the input is
/// counted byte by byte.
#[must_use]
pub fn scan(text: EscapedStr<'_>) -> Scan {
    let bytes = text.as_bytes();
    // The escape cannot overlap itself, so non-overlapping matches are exactly
    // the escapes a left-to-right walk would consume.
    let escapes = bytes.find_iter(&NULL_ESCAPE).count();
    Scan {
        len: bytes.len() - 3 * escapes,
        has_null_escape: escapes > 0,
    }
}

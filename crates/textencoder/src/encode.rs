use alloc::vec::Vec;

use bstr::ByteSlice;

use crate::{
    escaped::{EscapedStr, NULL_ESCAPE},
    scanner::{Scan, scan},
};

/// Encodes `text` into a freshly allocated buffer of exactly the right size.
///
/// Each [`NULL_ESCAPE`] becomes one `0x00`; every other byte is copied as is.
///
/// ```rust
/// use textencoder::{EscapedStr, encode};
///
/// assert_eq!(encode(EscapedStr::new(b"\xF4\x90\x80\x80C")), [0x00, 0x43]);
/// ```
#[must_use]
pub fn encode(text: EscapedStr<'_>) -> Vec<u8> {
    let Scan { len, has_null_escape } = scan(text);
    let bytes = text.as_bytes();

    let mut out = Vec::with_capacity(len);
    if has_null_escape {
        for (i, run) in bytes.split_str(&NULL_ESCAPE).enumerate() {
            if i > 0 {
                out.push(0);
            }
            out.extend_from_slice(run);
        }
    } else {
        out.extend_from_slice(bytes);
    }

    debug_assert_eq!(out.len(), len, "encoded length disagrees with scan");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::escaped::EscapedString;

    #[test]
    fn ascii_is_copied() {
        assert_eq!(encode(EscapedStr::from("AB")), [0x41, 0x42]);
    }

    #[test]
    fn escape_becomes_null() {
        assert_eq!(encode(EscapedStr::new(b"\xF4\x90\x80\x80C")), [0x00, 0x43]);
    }

    #[test]
    fn escapes_at_both_ends() {
        let text = EscapedString::from_text("\0mid\0");
        assert_eq!(encode(text.as_escaped()), b"\0mid\0");
    }

    #[test]
    fn adjacent_escapes() {
        let text = EscapedString::from_text("\0\0\0");
        assert_eq!(encode(text.as_escaped()), [0, 0, 0]);
    }

    #[test]
    fn partial_escape_is_kept() {
        let input = b"\xF4\x90\x80\x80\xF4\x90\x80";
        assert_eq!(encode(EscapedStr::new(input)), b"\0\xF4\x90\x80");
    }

    #[test]
    fn empty() {
        assert!(encode(EscapedStr::default()).is_empty());
    }
}

//! Host string representation: UTF-8 with nulls stored as [`NULL_ESCAPE`].

use alloc::vec::Vec;
use core::fmt;

use bstr::ByteSlice;

/// Reserved overlong sequence standing in for one null byte.
///
/// `F4 90` would start a scalar above `U+10FFFF`, so the sequence never occurs
/// in valid UTF-8 and is free to carry the null.
pub const NULL_ESCAPE: [u8; 4] = [0xF4, 0x90, 0x80, 0x80];

/// Borrowed host string.
///
/// The content ends at the first zero byte (the sentinel) or at the end of
/// the slice, whichever comes first. Content therefore never contains a zero
/// byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EscapedStr<'a> {
    content: &'a [u8],
}

impl<'a> EscapedStr<'a> {
    /// Wraps `bytes`, stopping at the first zero byte if there is one.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        let end = bytes.find_byte(0).unwrap_or(bytes.len());
        Self {
            content: &bytes[..end],
        }
    }

    /// Content bytes, excluding the sentinel.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.content
    }

    /// Content length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Whether the content is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Content starting at byte `offset`.
    ///
    /// Returns an empty string when `offset` is past the end.
    #[must_use]
    pub fn tail(&self, offset: usize) -> Self {
        Self {
            content: self.content.get(offset..).unwrap_or_default(),
        }
    }
}

impl<'a> From<&'a [u8]> for EscapedStr<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl<'a> From<&'a str> for EscapedStr<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl fmt::Debug for EscapedStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.content.as_bstr())
    }
}

/// Owned host string with nulls already escaped.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct EscapedString {
    content: Vec<u8>,
}

impl EscapedString {
    /// Builds the host form of `text`, escaping every `'\0'`.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    /// Builds the host form of `bytes`, escaping every zero byte.
    ///
    /// Other bytes are copied verbatim; they are expected to be UTF-8 already.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let nulls = bytes.iter().filter(|&&b| b == 0).count();
        let mut content = Vec::with_capacity(bytes.len() + 3 * nulls);
        for (i, segment) in bytes.split(|&b| b == 0).enumerate() {
            if i > 0 {
                content.extend_from_slice(&NULL_ESCAPE);
            }
            content.extend_from_slice(segment);
        }
        Self { content }
    }

    /// Borrows the string for encoding.
    #[must_use]
    pub fn as_escaped(&self) -> EscapedStr<'_> {
        EscapedStr {
            content: &self.content,
        }
    }

    /// Content bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.content
    }

    /// Content bytes followed by the zero sentinel, as the host stores them.
    #[must_use]
    pub fn to_terminated(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.content.len() + 1);
        bytes.extend_from_slice(&self.content);
        bytes.push(0);
        bytes
    }
}

impl From<&str> for EscapedString {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl fmt::Debug for EscapedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.as_escaped(), f)
    }
}

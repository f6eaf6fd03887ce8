//! Bounded encoding into a caller-owned buffer.
//!
//! The encoder walks the input one logical unit at a time. A unit is either a
//! UTF-8 sequence, whose width is read off its leading byte, or a
//! [`NULL_ESCAPE`], which consumes four input bytes and writes one `0x00`.
//! Before a unit is written its full width must fit in the space left;
//! otherwise the walk stops and the unit stays unconsumed, so callers can
//! resume with a fresh buffer.
//!
//! Encoding stops at the first of:
//!
//! - the destination is full,
//! - the input is exhausted,
//! - the next unit does not fit (`Ok`, short result),
//! - a leading byte is a continuation byte, or a unit runs past the end of
//!   the input (`Err`, the call is aborted).

use crate::{
    destination::BufferView,
    error::{EncodeError, Malformed},
    escaped::{EscapedStr, NULL_ESCAPE},
};

/// Progress of a bounded encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodeIntoResult {
    /// Logical units consumed. A null escape counts once.
    pub read: usize,
    /// Bytes written to the front of the destination.
    pub written: usize,
}

/// Encoded width of a UTF-8 unit, derived from its leading byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UnitWidth {
    /// `0xxxxxxx`
    One = 1,
    /// `110xxxxx`
    Two = 2,
    /// `1110xxxx`
    Three = 3,
    /// `1111xxxx`
    Four = 4,
}

impl UnitWidth {
    /// Classifies a leading byte.
    ///
    /// Returns `None` for continuation bytes (`10xxxxxx`), which cannot start
    /// a unit. Every `1111xxxx` byte is treated as a four-byte lead.
    #[must_use]
    pub const fn of_leading_byte(lead: u8) -> Option<Self> {
        if lead < 0x80 {
            Some(Self::One)
        } else if lead & 0xE0 == 0xC0 {
            Some(Self::Two)
        } else if lead & 0xF0 == 0xE0 {
            Some(Self::Three)
        } else if lead & 0xF0 == 0xF0 {
            Some(Self::Four)
        } else {
            None
        }
    }

    /// Width in bytes.
    #[must_use]
    pub const fn bytes(self) -> usize {
        self as usize
    }
}

/// Encodes as much of `text` as fits into `dst`.
///
/// Bytes past `written` are left untouched. A zero-length destination returns
/// an empty result without looking at the input.
///
/// # Errors
///
/// Returns [`EncodeError::MalformedInput`] when a unit starts with a
/// continuation byte or its leading byte announces more bytes than the input
/// holds. Units before the offending one have already been written.
///
/// # Examples
///
/// ```rust
/// use textencoder::{EncodeIntoResult, EscapedStr, encode_into};
///
/// let euro = EscapedStr::from("€");
///
/// let mut small = [0u8; 2];
/// assert_eq!(encode_into(euro, &mut small), Ok(EncodeIntoResult { read: 0, written: 0 }));
///
/// let mut exact = [0u8; 3];
/// assert_eq!(encode_into(euro, &mut exact), Ok(EncodeIntoResult { read: 1, written: 3 }));
/// assert_eq!(exact, [0xE2, 0x82, 0xAC]);
/// ```
pub fn encode_into(
    text: EscapedStr<'_>,
    dst: &mut [u8],
) -> Result<EncodeIntoResult, EncodeError> {
    let src = text.as_bytes();
    let mut pos = 0;
    let mut written = 0;
    let mut read = 0;

    while written < dst.len() {
        let rest = &src[pos..];
        let Some(&lead) = rest.first() else {
            break;
        };

        if rest.starts_with(&NULL_ESCAPE) {
            dst[written] = 0;
            written += 1;
            pos += NULL_ESCAPE.len();
            read += 1;
            continue;
        }

        let width = UnitWidth::of_leading_byte(lead)
            .ok_or_else(|| malformed(pos, Malformed::InvalidLeadingByte(lead)))?
            .bytes();

        if dst.len() - written < width {
            trace_event!(trace, read = read, written = written, width = width, "destination exhausted");
            break;
        }

        let Some(unit) = rest.get(..width) else {
            return Err(malformed(
                pos,
                Malformed::Truncated {
                    expected: width,
                    available: rest.len(),
                },
            ));
        };

        dst[written..written + width].copy_from_slice(unit);
        written += width;
        pos += width;
        read += 1;
    }

    Ok(EncodeIntoResult { read, written })
}

/// Encodes into a host buffer view.
///
/// # Errors
///
/// Returns [`EncodeError::InvalidArgument`] before touching anything when
/// `dst` is not a [`BufferView::U8`], and otherwise fails like
/// [`encode_into`].
pub fn encode_into_view(
    text: EscapedStr<'_>,
    dst: BufferView<'_>,
) -> Result<EncodeIntoResult, EncodeError> {
    let bytes = dst
        .into_bytes()
        .map_err(|found| EncodeError::InvalidArgument { found })?;
    encode_into(text, bytes)
}

fn malformed(offset: usize, reason: Malformed) -> EncodeError {
    trace_event!(debug, offset = offset, reason = %reason, "malformed input");
    EncodeError::MalformedInput { offset, reason }
}

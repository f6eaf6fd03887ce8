use thiserror::Error;

use crate::destination::ElementType;

/// Failure of a bounded encode.
///
/// Running out of destination space is not an error; it is reported through
/// [`EncodeIntoResult`](crate::EncodeIntoResult).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// The destination is not a byte view. Nothing was written.
    #[error("invalid argument: destination must be a u8 view, got {found}")]
    InvalidArgument {
        /// Element type of the rejected view.
        found: ElementType,
    },
    /// The input violates the leading-byte structure the encoder relies on.
    ///
    /// The call is aborted; bytes written before the failure are left in the
    /// destination and no result is reported.
    #[error("malformed input at byte {offset}: {reason}")]
    MalformedInput {
        /// Byte offset of the offending unit within the input.
        offset: usize,
        /// What was wrong with it.
        reason: Malformed,
    },
}

/// Reason an input unit could not be classified or copied.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformed {
    /// A continuation byte (`0x80..=0xBF`) appeared where a unit should start.
    #[error("invalid leading byte 0x{0:02X}")]
    InvalidLeadingByte(u8),
    /// The leading byte announced more bytes than the input holds.
    #[error("truncated {expected}-byte sequence, {available} bytes available")]
    Truncated {
        /// Width announced by the leading byte.
        expected: usize,
        /// Bytes left in the input, leading byte included.
        available: usize,
    },
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn messages() {
        let err = EncodeError::MalformedInput {
            offset: 3,
            reason: Malformed::InvalidLeadingByte(0x80),
        };
        assert_eq!(
            err.to_string(),
            "malformed input at byte 3: invalid leading byte 0x80"
        );

        let err = EncodeError::MalformedInput {
            offset: 0,
            reason: Malformed::Truncated {
                expected: 3,
                available: 1,
            },
        };
        assert_eq!(
            err.to_string(),
            "malformed input at byte 0: truncated 3-byte sequence, 1 bytes available"
        );

        let err = EncodeError::InvalidArgument {
            found: ElementType::U16,
        };
        assert_eq!(
            err.to_string(),
            "invalid argument: destination must be a u8 view, got u16"
        );
    }
}

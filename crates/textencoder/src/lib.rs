//! UTF-8 text encoder for host strings that carry nulls in-band.
//!
//! Host strings are stored as UTF-8 terminated by a zero byte, so a literal
//! null cannot live inside them. Instead a null is stored as the reserved
//! overlong sequence [`NULL_ESCAPE`] (`F4 90 80 80`), and encoding turns each
//! occurrence back into a single `0x00` byte.
//!
//! Two operations are provided:
//!
//! - [`encode`] scans the input, allocates exactly the encoded length and
//!   fills it.
//! - [`encode_into`] writes into a caller-owned buffer and stops before the
//!   first unit that does not fit, reporting what it consumed and produced.
//!
//! ```rust
//! use textencoder::{EscapedString, encode, encode_into};
//!
//! let text = EscapedString::from_text("a\0€");
//! assert_eq!(encode(text.as_escaped()), b"a\0\xE2\x82\xAC");
//!
//! let mut dst = [0u8; 4];
//! let result = encode_into(text.as_escaped(), &mut dst).unwrap();
//! assert_eq!((result.read, result.written), (2, 2));
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

/// Emits a `tracing` event when the `tracing` feature is enabled.
macro_rules! trace_event {
    ($level:ident, $($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::$level!($($arg)*);
    };
}

mod destination;
mod encode;
mod encode_into;
mod encoder;
mod error;
mod escaped;
mod options;
mod scanner;

#[cfg(test)]
mod tests;

pub use destination::{BufferView, ElementType};
pub use encode::encode;
pub use encode_into::{EncodeIntoResult, UnitWidth, encode_into, encode_into_view};
pub use encoder::TextEncoder;
pub use error::{EncodeError, Malformed};
pub use escaped::{EscapedStr, EscapedString, NULL_ESCAPE};
pub use options::EncoderOptions;
pub use scanner::{Scan, scan};

use alloc::vec::Vec;

use crate::{
    destination::BufferView,
    encode::encode,
    encode_into::{EncodeIntoResult, encode_into, encode_into_view},
    error::EncodeError,
    escaped::EscapedStr,
    options::EncoderOptions,
};

/// Stateless UTF-8 encoder.
///
/// The free functions [`encode`](crate::encode) and
/// [`encode_into`](crate::encode_into) behave like `TextEncoder::default()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextEncoder {
    options: EncoderOptions,
}

impl TextEncoder {
    /// Creates an encoder with `options`.
    #[must_use]
    pub fn new(options: EncoderOptions) -> Self {
        Self { options }
    }

    /// Options this encoder was built with.
    #[must_use]
    pub fn options(&self) -> EncoderOptions {
        self.options
    }

    /// Label of the produced encoding.
    #[must_use]
    pub fn encoding(&self) -> &'static str {
        "utf-8"
    }

    /// See [`encode`](crate::encode).
    #[must_use]
    pub fn encode<'a>(&self, text: impl Into<EscapedStr<'a>>) -> Vec<u8> {
        encode(text.into())
    }

    /// See [`encode_into`](crate::encode_into).
    ///
    /// # Errors
    ///
    /// Fails on malformed input.
    pub fn encode_into<'a>(
        &self,
        text: impl Into<EscapedStr<'a>>,
        dst: &mut [u8],
    ) -> Result<EncodeIntoResult, EncodeError> {
        self.check(encode_into(text.into(), dst))
    }

    /// See [`encode_into_view`](crate::encode_into_view).
    ///
    /// # Errors
    ///
    /// Fails on a non-byte view or on malformed input.
    pub fn encode_into_view<'a>(
        &self,
        text: impl Into<EscapedStr<'a>>,
        dst: BufferView<'_>,
    ) -> Result<EncodeIntoResult, EncodeError> {
        self.check(encode_into_view(text.into(), dst))
    }

    #[cfg_attr(not(any(test, feature = "fuzzing")), allow(clippy::unused_self))]
    fn check(
        &self,
        result: Result<EncodeIntoResult, EncodeError>,
    ) -> Result<EncodeIntoResult, EncodeError> {
        #[cfg(any(test, feature = "fuzzing"))]
        if self.options.panic_on_error {
            if let Err(err @ EncodeError::MalformedInput { .. }) = result {
                panic!("{err}");
            }
        }
        result
    }
}

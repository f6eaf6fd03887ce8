/// Configuration for a [`TextEncoder`](crate::TextEncoder).
///
/// # Examples
///
/// ```rust
/// use textencoder::{EncoderOptions, TextEncoder};
///
/// let encoder = TextEncoder::new(EncoderOptions::default());
/// assert_eq!(encoder.encoding(), "utf-8");
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncoderOptions {
    #[cfg(any(test, feature = "fuzzing"))]
    /// Panic on malformed input instead of returning the error.
    ///
    /// Enabled only in test and fuzzing builds to produce backtraces at the
    /// failing unit.
    pub panic_on_error: bool,
}

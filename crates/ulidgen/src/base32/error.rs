/// Reasons a string is rejected as a ULID.
///
/// Produced by [`crate::validate`] and [`crate::try_decode_time`]. The
/// lenient counterparts collapse these into `false` / `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Base32Error {
    /// The input is not exactly 26 characters long.
    #[error("invalid length: {len}")]
    InvalidLength { len: usize },

    /// A character outside the Crockford alphabet was found at `index`. For
    /// a non-ASCII character, `byte` is its leading UTF-8 byte.
    #[error("invalid symbol {byte:#04x} at index {index}")]
    InvalidSymbol { byte: u8, index: usize },

    /// The leading symbol decodes above 7, which would need more than 128
    /// bits.
    #[error("leading symbol {symbol:?} exceeds the 48-bit timestamp range")]
    TimestampOverflow { symbol: char },
}

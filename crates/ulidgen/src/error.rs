use crate::base32::Base32Error;

/// A result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All error variants that `ulidgen` can emit.
///
/// Malformed input is never an error on the lenient paths
/// ([`crate::is_valid`], [`crate::decode_time`]); it only surfaces here from
/// the strict variants that report *why* a string was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The random byte source could not supply bytes.
    ///
    /// This is fatal for the call that hit it. The generator does not retry
    /// and leaves its state untouched, so a later call may succeed if the
    /// platform recovers.
    #[error("secure random byte source is unavailable")]
    EntropyUnavailable,

    /// The random part of the last ID is exhausted and the timestamp is
    /// already at the 48-bit ceiling, so no larger ID exists.
    ///
    /// The generator leaves its state untouched.
    #[error("timestamp {timestamp} is at the 48-bit ceiling; no later ULID exists")]
    TimestampExhausted { timestamp: u64 },

    /// The input is not a structurally valid ULID.
    #[error(transparent)]
    Base32(#[from] Base32Error),
}

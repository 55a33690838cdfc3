use crate::{Error, RandSource, Result};
use rand::{TryRngCore, rngs::OsRng};

/// A `RandSource` reading directly from the operating system's entropy
/// source (`getrandom(2)`, `SecRandomCopyBytes`, ... via `rand`'s [`OsRng`]).
///
/// Every call is a system call, and a failing platform source surfaces as
/// [`Error::EntropyUnavailable`] rather than a panic.
#[derive(Default, Clone, Copy, Debug)]
pub struct OsRandom;

impl RandSource for OsRandom {
    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        OsRng.try_fill_bytes(buf).map_err(|_err| {
            #[cfg(feature = "tracing")]
            tracing::error!(error = %_err, "OS entropy source failed");
            Error::EntropyUnavailable
        })
    }
}

use crate::Result;

/// A source of cryptographically secure random bytes.
///
/// This abstraction allows you to plug in the platform entropy source or a
/// mocked source in tests.
///
/// Implementations must either fill the whole buffer or fail with
/// [`crate::Error::EntropyUnavailable`]. Retrying short reads is the
/// source's job, never the caller's.
///
/// # Example
/// ```
/// use ulidgen::{RandSource, Result};
///
/// struct FixedRand;
/// impl RandSource for FixedRand {
///     fn fill(&self, buf: &mut [u8]) -> Result<()> {
///         buf.fill(0xAB);
///         Ok(())
///     }
/// }
///
/// let mut buf = [0; 4];
/// FixedRand.fill(&mut buf).unwrap();
/// assert_eq!(buf, [0xAB; 4]);
/// ```
pub trait RandSource {
    /// Fills `buf` entirely with random bytes.
    ///
    /// # Errors
    /// Returns [`crate::Error::EntropyUnavailable`] when the source cannot
    /// supply bytes.
    fn fill(&self, buf: &mut [u8]) -> Result<()>;
}

impl<R: RandSource + ?Sized> RandSource for &R {
    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        (**self).fill(buf)
    }
}

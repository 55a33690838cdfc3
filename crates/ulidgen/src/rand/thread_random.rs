use crate::{RandSource, Result};
use rand::{RngCore, rng};

/// A `RandSource` that uses the thread-local RNG (`rand::rng()`).
///
/// This RNG is fast, cryptographically secure (ChaCha-based), and reseeded
/// from the OS periodically. Unlike [`crate::OsRandom`] it never fails once
/// seeded, so it suits hot generation loops.
///
/// ⚠️ NOTE: The underlying `ThreadRng` is not `Send` or `Sync`. This type
/// does **not** store it; it looks up the current thread's generator on
/// each call, so it may be moved across threads freely.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandSource for ThreadRandom {
    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        rng().fill_bytes(buf);
        Ok(())
    }
}

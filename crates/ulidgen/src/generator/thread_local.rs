//! Thread-local ULID generation.
//!
//! Each OS thread lazily owns one [`GenerationStream`] over the system clock
//! and the OS entropy source. IDs from one thread are strictly increasing;
//! IDs from different threads are only ordered by their timestamps.
//!
//! # Example
//! ```rust
//! use ulidgen::{decode_time, ulid};
//!
//! let a = ulid(Some(1_000)).unwrap();
//! let b = ulid(None).unwrap();
//! assert!(a < b);
//! assert_eq!(decode_time(a), Some(1_000));
//! ```

use crate::{GenerationStream, OsRandom, Result, SystemClock, UlidBuf};
use std::cell::RefCell;

/// The stream type backing [`ulid`].
pub type ThreadLocalStream = GenerationStream<SystemClock, OsRandom>;

thread_local! {
    static STREAM: RefCell<ThreadLocalStream> =
        const { RefCell::new(GenerationStream::new(SystemClock, OsRandom)) };
}

/// Generates a ULID on the calling thread's stream.
///
/// `seed` follows [`GenerationStream::generate`]: `None` means "now".
///
/// # Errors
/// Returns [`crate::Error::EntropyUnavailable`] if the OS entropy source
/// fails while fresh randomness is needed.
pub fn ulid(seed: Option<u64>) -> Result<UlidBuf> {
    STREAM.with_borrow_mut(|stream| stream.generate(seed))
}

/// Generates a ULID for the current time on the calling thread's stream.
///
/// # Errors
/// See [`ulid`].
pub fn ulid_now() -> Result<UlidBuf> {
    ulid(None)
}

//! Crockford base32 codec for the two halves of a ULID.
//!
//! The timestamp and the randomness are encoded independently: ten symbols
//! for the 48-bit timestamp and sixteen for the eighty random bits, which the
//! generator keeps as 5-bit groups so it can increment them in place.

mod crockford;
mod error;

pub use crockford::*;
pub use error::*;

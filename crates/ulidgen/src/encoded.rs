use crate::base32::{
    Base32Error, MAX_FIRST_SYMBOL, RANDOM_LEN, RandomGroups, TIMESTAMP_LEN, decode_symbol,
    encode_random, encode_timestamp,
};
use core::{fmt, str::FromStr};

/// Length of a canonical ULID string.
pub const ULID_LEN: usize = TIMESTAMP_LEN + RANDOM_LEN;

/// A stack-allocated, canonical (uppercase) ULID string.
///
/// Produced by [`crate::GenerationStream::generate`] or by parsing a string
/// with [`str::parse`]. The buffer only ever holds symbols from
/// [`crate::ALPHABET`], so ordering the buffers orders the IDs.
///
/// # Example
/// ```
/// use ulidgen::UlidBuf;
///
/// let id: UlidBuf = "01aryz6s41tsv4rrffq69g5fav".parse().unwrap();
/// assert_eq!(id, "01ARYZ6S41TSV4RRFFQ69G5FAV");
/// assert_eq!(id.timestamp(), 1_469_918_176_385);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct UlidBuf {
    buf: [u8; ULID_LEN],
}

impl UlidBuf {
    /// Renders a timestamp and randomness groups into their 26 symbols.
    #[must_use]
    pub const fn from_parts(timestamp: u64, random: &RandomGroups) -> Self {
        let ts = encode_timestamp(timestamp);
        let rand = encode_random(random);
        let mut buf = [0_u8; ULID_LEN];
        let mut i = 0;
        while i < TIMESTAMP_LEN {
            buf[i] = ts[i];
            i += 1;
        }
        while i < ULID_LEN {
            buf[i] = rand[i - TIMESTAMP_LEN];
            i += 1;
        }
        Self { buf }
    }

    /// Returns a `&str` view of the encoding.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        // SAFETY: `self.buf` holds only Crockford base32 ASCII symbols, both
        // when rendered from parts and when parsed (which validates and
        // uppercases).
        unsafe { core::str::from_utf8_unchecked(&self.buf) }
    }

    /// Returns the raw ASCII bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; ULID_LEN] {
        &self.buf
    }

    /// Consumes the buffer and returns the raw ASCII bytes.
    #[must_use]
    pub const fn into_inner(self) -> [u8; ULID_LEN] {
        self.buf
    }

    /// Returns the embedded millisecond timestamp.
    #[must_use]
    pub fn timestamp(&self) -> u64 {
        self.buf[..TIMESTAMP_LEN]
            .iter()
            .fold(0, |acc, &b| (acc << 5) | u64::from(decode_symbol(b).unwrap_or(0)))
    }
}

impl fmt::Display for UlidBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for UlidBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UlidBuf").field(&self.as_str()).finish()
    }
}

impl AsRef<str> for UlidBuf {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<&str> for UlidBuf {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<str> for UlidBuf {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl FromStr for UlidBuf {
    type Err = Base32Error;

    /// Validates `s` and stores its canonical uppercase form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = ascii_symbols(s)?;
        validate_bytes(bytes)?;
        Ok(Self {
            buf: (*bytes).map(|b| b.to_ascii_uppercase()),
        })
    }
}

impl TryFrom<&str> for UlidBuf {
    type Error = Base32Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Length is measured in characters, not bytes.
fn check_len(s: &str) -> Result<(), Base32Error> {
    match s.chars().count() {
        ULID_LEN => Ok(()),
        len => Err(Base32Error::InvalidLength { len }),
    }
}

/// Checks the length, then views `s` as 26 single-byte symbols.
fn ascii_symbols(s: &str) -> Result<&[u8; ULID_LEN], Base32Error> {
    check_len(s)?;
    s.as_bytes().try_into().map_err(|_| first_rejected(s))
}

/// The error for the earliest rejected character of a 26-character string
/// holding non-ASCII characters. Those are reported by their leading UTF-8
/// byte, which the lookup never accepts.
fn first_rejected(s: &str) -> Base32Error {
    for (index, (offset, _)) in s.char_indices().enumerate() {
        let byte = s.as_bytes()[offset];
        let checked = if index == 0 {
            leading_symbol(byte)
        } else {
            symbol_at(byte, index)
        };
        if let Err(err) = checked {
            return err;
        }
    }
    Base32Error::InvalidLength { len: s.len() }
}

fn symbol_at(byte: u8, index: usize) -> Result<u8, Base32Error> {
    decode_symbol(byte).ok_or(Base32Error::InvalidSymbol { byte, index })
}

fn leading_symbol(byte: u8) -> Result<u8, Base32Error> {
    let v = symbol_at(byte, 0)?;
    if v > MAX_FIRST_SYMBOL {
        return Err(Base32Error::TimestampOverflow {
            symbol: char::from(byte),
        });
    }
    Ok(v)
}

fn validate_bytes(bytes: &[u8; ULID_LEN]) -> Result<(), Base32Error> {
    leading_symbol(bytes[0])?;
    for (index, &byte) in bytes.iter().enumerate().skip(1) {
        symbol_at(byte, index)?;
    }
    Ok(())
}

/// Checks that `s` is a structurally valid ULID and reports why it is not.
///
/// # Errors
/// - [`Base32Error::InvalidLength`] unless `s` is exactly 26 characters
/// - [`Base32Error::InvalidSymbol`] for the first character outside the
///   alphabet (a non-ASCII character reports its leading UTF-8 byte)
/// - [`Base32Error::TimestampOverflow`] if the leading symbol is above `7`
pub fn validate(s: impl AsRef<str>) -> Result<(), Base32Error> {
    validate_bytes(ascii_symbols(s.as_ref())?)
}

/// Returns `true` if `s` is a structurally valid ULID.
///
/// Input is matched case-insensitively. The check is stricter than
/// encoding: a leading symbol above `7` is rejected rather than truncated.
///
/// # Example
/// ```
/// use ulidgen::is_valid;
///
/// assert!(is_valid("01ARYZ6S41TSV4RRFFQ69G5FAV"));
/// assert!(is_valid("01aryz6s41tsv4rrffq69g5fav"));
/// assert!(!is_valid("81ARYZ6S41TSV4RRFFQ69G5FAV"));
/// assert!(!is_valid("short"));
/// ```
#[must_use]
pub fn is_valid(s: impl AsRef<str>) -> bool {
    validate(s).is_ok()
}

/// Extracts the millisecond timestamp and reports why it could not.
///
/// Only the length and the first ten symbols are examined; the random part
/// is not validated.
///
/// # Errors
/// Same as [`validate`], restricted to the timestamp symbols.
pub fn try_decode_time(s: impl AsRef<str>) -> Result<u64, Base32Error> {
    let s = s.as_ref();
    check_len(s)?;
    // Byte and character indices agree up to the first non-ASCII byte, which
    // the lookup rejects.
    let bytes = s.as_bytes();
    let mut acc = u64::from(leading_symbol(bytes[0])?);
    for (index, &byte) in bytes.iter().enumerate().take(TIMESTAMP_LEN).skip(1) {
        acc = (acc << 5) | u64::from(symbol_at(byte, index)?);
    }
    // The leading symbol is at most 0b111, so the accumulator already holds
    // exactly 48 bits.
    Ok(acc)
}

/// Extracts the millisecond timestamp of `s`, or `None` if its length or
/// timestamp symbols are malformed.
///
/// # Example
/// ```
/// use ulidgen::decode_time;
///
/// assert_eq!(decode_time("01ARYZ6S41TSV4RRFFQ69G5FAV"), Some(1_469_918_176_385));
/// assert_eq!(decode_time(""), None);
/// ```
#[must_use]
pub fn decode_time(s: impl AsRef<str>) -> Option<u64> {
    try_decode_time(s).ok()
}

/// The Crockford base32 alphabet, in value order.
///
/// `I`, `L`, `O` and `U` are absent so that encoded IDs cannot be confused
/// with `1`, `1`, `0` or read as accidental words.
pub const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

const NO_VALUE: u8 = 255;
const BITS_PER_CHAR: usize = 5;
const MASK: u16 = 0x1F;

/// Number of characters in the encoded timestamp.
pub const TIMESTAMP_LEN: usize = 10;
/// Number of characters (and 5-bit groups) in the encoded randomness.
pub const RANDOM_LEN: usize = 16;
/// Number of random bytes drawn to seed a fresh randomness component.
pub const RANDOM_BYTES: usize = 10;
/// Largest value the leading symbol of a ULID may decode to.
///
/// 26 symbols carry 130 bits but a ULID only has 128, so the two high bits
/// of the first symbol must be zero.
pub const MAX_FIRST_SYMBOL: u8 = 7;

/// Largest millisecond timestamp a ULID can carry (48 bits).
pub const MAX_TIMESTAMP: u64 = (1 << 48) - 1;

/// Largest value of one 5-bit random group.
pub const MAX_GROUP: u8 = 31;

/// Sixteen 5-bit groups holding the 80-bit randomness, most significant
/// group first.
pub type RandomGroups = [u8; RANDOM_LEN];

/// Lookup table for Crockford base32 decoding
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    // Main alphabet, allow lower-case. No aliases: `I`, `L`, `O` and `U`
    // stay invalid in both cases.
    while i < 32 {
        let c = ALPHABET[i as usize];
        lut[c as usize] = i;
        if c.is_ascii_uppercase() {
            lut[c.to_ascii_lowercase() as usize] = i;
        }
        i += 1;
    }
    lut
};

/// Decodes a single symbol, case-insensitively.
///
/// Returns `None` for any byte outside the alphabet, including `I`, `L`,
/// `O` and `U` in either case.
#[inline]
#[must_use]
pub const fn decode_symbol(c: u8) -> Option<u8> {
    match LOOKUP[c as usize] {
        NO_VALUE => None,
        v => Some(v),
    }
}

/// Slices `N` big-endian bytes into `M` 5-bit groups.
///
/// When `M * 5` exceeds `N * 8` the output is left-padded with zero bits,
/// so the first group only carries the remaining low bits. Callers must pick
/// `M` so that `M * 5 >= N * 8`.
#[inline]
const fn pack_groups<const N: usize, const M: usize>(input: &[u8; N]) -> [u8; M] {
    let mut out = [0_u8; M];
    let mut bits = M * BITS_PER_CHAR - N * 8;
    let mut acc = 0_u16;
    let mut i = 0;
    let mut o = 0;
    while i < N {
        // High bits fall off the u16; only the unread tail matters.
        acc = (acc << 8) | input[i] as u16;
        bits += 8;
        while bits >= BITS_PER_CHAR {
            bits -= BITS_PER_CHAR;
            out[o] = ((acc >> bits) & MASK) as u8;
            o += 1;
        }
        i += 1;
    }
    out
}

#[inline]
const fn to_symbols<const M: usize>(groups: &[u8; M]) -> [u8; M] {
    let mut out = [0_u8; M];
    let mut i = 0;
    while i < M {
        out[i] = ALPHABET[(groups[i] & MASK as u8) as usize];
        i += 1;
    }
    out
}

/// Encodes the low 48 bits of `ms` as ten Crockford symbols.
///
/// Bits above bit 47 are dropped: the value wraps instead of failing.
///
/// # Example
/// ```
/// use ulidgen::base32::encode_timestamp;
///
/// assert_eq!(&encode_timestamp(1_469_918_176_385), b"01ARYZ6S41");
/// ```
#[must_use]
pub const fn encode_timestamp(ms: u64) -> [u8; TIMESTAMP_LEN] {
    let be = ms.to_be_bytes();
    let low48 = [be[2], be[3], be[4], be[5], be[6], be[7]];
    to_symbols(&pack_groups::<6, TIMESTAMP_LEN>(&low48))
}

/// Maps sixteen 5-bit groups one-to-one onto the alphabet.
#[must_use]
pub const fn encode_random(groups: &RandomGroups) -> [u8; RANDOM_LEN] {
    to_symbols(groups)
}

/// Repacks 80 random bits into sixteen 5-bit groups.
#[must_use]
pub const fn bytes_to_groups(bytes: [u8; RANDOM_BYTES]) -> RandomGroups {
    pack_groups::<RANDOM_BYTES, RANDOM_LEN>(&bytes)
}

/// Adds one to `groups` read as a 16-digit, big-endian base-32 counter.
///
/// Returns `false` when the counter was already at its maximum (every group
/// 31); the carry then leaves every group at zero and the caller decides
/// what happens next.
#[inline]
pub fn increment_groups(groups: &mut RandomGroups) -> bool {
    for g in groups.iter_mut().rev() {
        if *g < MAX_GROUP {
            *g += 1;
            return true;
        }
        *g = 0;
    }
    false
}

/// Returns `true` if every group fits in five bits.
#[must_use]
pub const fn groups_in_range(groups: &RandomGroups) -> bool {
    let mut i = 0;
    while i < RANDOM_LEN {
        if groups[i] > MAX_GROUP {
            return false;
        }
        i += 1;
    }
    true
}

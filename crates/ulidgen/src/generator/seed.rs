//! Resolution of host-supplied seed timestamps.
//!
//! Hosts that hand over loosely typed numbers (JavaScript numbers, command
//! line text) can pass anything. Only finite, non-negative values seed a
//! generation; everything else means "use the current time", expressed as
//! `None`.

/// Converts a host number into a seed timestamp.
///
/// Fractional milliseconds are truncated and values beyond `u64::MAX`
/// saturate. Negative, NaN and infinite values yield `None`.
///
/// # Example
/// ```
/// use ulidgen::seed_from_f64;
///
/// assert_eq!(seed_from_f64(1_000.9), Some(1_000));
/// assert_eq!(seed_from_f64(-1.0), None);
/// assert_eq!(seed_from_f64(f64::NAN), None);
/// ```
#[must_use]
pub fn seed_from_f64(value: f64) -> Option<u64> {
    if value.is_finite() && value >= 0.0 {
        // `as` truncates toward zero and saturates at the type bounds.
        Some(value as u64)
    } else {
        None
    }
}

/// Parses a textual seed timestamp.
///
/// Integers are taken exactly, other numerals go through [`seed_from_f64`],
/// and anything unparseable yields `None`.
#[must_use]
pub fn parse_seed(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    match raw.parse::<u64>() {
        Ok(ms) => Some(ms),
        Err(_) => raw.parse::<f64>().ok().and_then(seed_from_f64),
    }
}

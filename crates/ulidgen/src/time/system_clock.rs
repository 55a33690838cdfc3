use crate::TimeSource;
use std::time::{SystemTime, UNIX_EPOCH};

/// The system wall clock, in milliseconds since the Unix epoch.
///
/// NTP steps and manual adjustments are passed through as-is. A clock that
/// jumps backwards is harmless to a [`crate::GenerationStream`], which keeps
/// its last timestamp until the clock catches up.
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn current_millis(&self) -> u64 {
        // A clock set before 1970 reads as the epoch itself.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_a_plausible_wall_clock() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.current_millis() > 1_577_836_800_000);
    }

    #[test]
    fn never_goes_far_backwards() {
        let a = SystemClock.current_millis();
        let b = SystemClock.current_millis();
        assert!(b + 1_000 >= a);
    }
}

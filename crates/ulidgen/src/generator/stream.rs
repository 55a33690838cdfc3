use crate::{
    Error, RandSource, Result, TimeSource, UlidBuf,
    base32::{
        MAX_TIMESTAMP, RANDOM_BYTES, RandomGroups, bytes_to_groups, groups_in_range,
        increment_groups,
    },
};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// The last identifier a [`GenerationStream`] produced, split into its
/// timestamp and its randomness as sixteen 5-bit groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MonotonicState {
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
    /// 80 random bits, most significant group first, each in `0..=31`.
    pub random: RandomGroups,
}

impl MonotonicState {
    /// Renders the state as a ULID.
    #[must_use]
    pub const fn to_ulid(&self) -> UlidBuf {
        UlidBuf::from_parts(self.timestamp, &self.random)
    }

    /// Returns `true` if every random group is in `0..=31`.
    #[must_use]
    pub const fn is_well_formed(&self) -> bool {
        groups_in_range(&self.random)
    }
}

/// A *monotonic* ULID generator owning one stream of state.
///
/// Successive IDs from one stream are strictly increasing: within a
/// millisecond the randomness is incremented instead of redrawn. A stream is
/// not synchronized and is driven through `&mut self`; give each thread or
/// worker its own stream (see [`crate::ulid`] for a per-thread default).
/// Independent streams make no ordering promises to each other.
///
/// A stream is not `Clone`: two copies continuing from the same state would
/// emit the same IDs.
///
/// ```compile_fail
/// use ulidgen::{GenerationStream, SystemClock, ThreadRandom};
///
/// let stream = GenerationStream::new(SystemClock, ThreadRandom);
/// let copy: GenerationStream<SystemClock, ThreadRandom> = stream.clone();
/// ```
///
/// ## Seeds
/// - A seed later than the last timestamp starts a new millisecond with
///   fresh randomness.
/// - A seed equal to *or earlier than* the last timestamp is ignored; the
///   last timestamp is reused and the randomness incremented.
/// - If the randomness is exhausted (all 80 bits set), the timestamp moves
///   forward by exactly one millisecond and the randomness is redrawn. At
///   the 48-bit ceiling there is nothing to move to and generation fails
///   with [`Error::TimestampExhausted`].
///
/// # Example
/// ```
/// use ulidgen::{GenerationStream, SystemClock, ThreadRandom, decode_time};
///
/// let mut stream = GenerationStream::new(SystemClock, ThreadRandom);
///
/// let a = stream.generate(Some(1_000)).unwrap();
/// let b = stream.generate(Some(999)).unwrap();
/// assert!(a < b);
/// assert_eq!(decode_time(b), Some(1_000));
/// ```
#[derive(Debug)]
pub struct GenerationStream<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    state: Option<MonotonicState>,
    time: T,
    rng: R,
}

impl<T, R> GenerationStream<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    /// Creates an empty stream. The first generation always draws fresh
    /// randomness.
    pub const fn new(time: T, rng: R) -> Self {
        Self {
            state: None,
            time,
            rng,
        }
    }

    /// Creates a stream that continues from `state`, as if `state` was the
    /// last ID it produced.
    ///
    /// # ⚠️ Note
    /// State is not meant to survive restarts; this is for tests and for
    /// handing a stream over between owners.
    ///
    /// # Panics
    /// In debug builds, if a random group of `state` is above `31`.
    pub const fn with_state(state: MonotonicState, time: T, rng: R) -> Self {
        debug_assert!(state.is_well_formed(), "random groups must be in 0..=31");
        Self {
            state: Some(state),
            time,
            rng,
        }
    }

    /// The last ID produced, or `None` before the first successful call.
    pub const fn state(&self) -> Option<MonotonicState> {
        self.state
    }

    /// Forgets the last ID. The next call behaves like the first one.
    pub fn reset(&mut self) {
        self.state = None;
    }

    /// The time source consulted when no seed is supplied.
    pub const fn time_source(&self) -> &T {
        &self.time
    }

    /// The random source used for fresh randomness.
    pub const fn rand_source(&self) -> &R {
        &self.rng
    }

    /// Generates the next ULID using the current time.
    ///
    /// # Errors
    /// See [`Self::generate`].
    pub fn next_ulid(&mut self) -> Result<UlidBuf> {
        self.generate(None)
    }

    /// Generates the next ULID, seeded with `seed` milliseconds or with the
    /// time source when `seed` is `None`.
    ///
    /// Timestamps above 48 bits are stored as given but wrap when encoded.
    ///
    /// # Errors
    /// - [`Error::EntropyUnavailable`] if fresh randomness is needed and the
    ///   random source fails
    /// - [`Error::TimestampExhausted`] if the randomness is exhausted at the
    ///   largest 48-bit timestamp
    ///
    /// In both cases the stream state is left as it was.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate(&mut self, seed: Option<u64>) -> Result<UlidBuf> {
        let seed = match seed {
            Some(ms) => ms,
            None => self.time.current_millis(),
        };

        let next = match self.state {
            Some(last) if seed <= last.timestamp => self.advance(last)?,
            _ => MonotonicState {
                timestamp: seed,
                random: self.fresh_random()?,
            },
        };

        self.state = Some(next);
        Ok(next.to_ulid())
    }

    fn advance(&self, mut last: MonotonicState) -> Result<MonotonicState> {
        if increment_groups(&mut last.random) {
            return Ok(last);
        }
        self.cold_random_overflow(last.timestamp)
    }

    #[cold]
    #[inline(never)]
    fn cold_random_overflow(&self, timestamp: u64) -> Result<MonotonicState> {
        if timestamp >= MAX_TIMESTAMP {
            #[cfg(feature = "tracing")]
            tracing::warn!(timestamp, "randomness exhausted at the 48-bit timestamp ceiling");
            return Err(Error::TimestampExhausted { timestamp });
        }
        let bumped = timestamp + 1;
        #[cfg(feature = "tracing")]
        tracing::debug!(timestamp, bumped, "randomness exhausted, advancing timestamp");
        Ok(MonotonicState {
            timestamp: bumped,
            random: self.fresh_random()?,
        })
    }

    fn fresh_random(&self) -> Result<RandomGroups> {
        let mut bytes = [0_u8; RANDOM_BYTES];
        self.rng.fill(&mut bytes)?;
        Ok(bytes_to_groups(bytes))
    }
}

use crate::{
    Counter, HostnameSource, ProcessIdSource, RandSource, Result, TimeSource,
    base36::{self, BLOCK_SIZE, DISCRETE_VALUES},
    fingerprint,
};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// Leading character of every CUID. Keeps identifiers valid as HTML/XML
/// element ids, which may not start with a digit.
pub const PREFIX: char = 'c';

/// Builds CUIDs and slugs from pluggable environment sources.
///
/// A CUID is the concatenation of:
///
/// | block       | width    | source                                     |
/// |-------------|----------|--------------------------------------------|
/// | prefix      | 1        | the constant [`PREFIX`]                    |
/// | timestamp   | variable | [`TimeSource`], unpadded base36            |
/// | counter     | 4        | [`Counter`], zero-padded base36            |
/// | fingerprint | 4        | [`ProcessIdSource`] and [`HostnameSource`] |
/// | random      | 4        | [`RandSource`], zero-padded base36         |
/// | random      | 4        | [`RandSource`], drawn independently        |
///
/// Only the counter carries state between calls. The generator borrows it so
/// that several generators (or the free functions) can share one counter.
///
/// # Example
/// ```
/// use cuid::{Counter, CuidGenerator, OsHostname, OsProcessId, SystemClock, ThreadRandom};
///
/// let counter = Counter::new();
/// let generator = CuidGenerator::new(&counter, SystemClock, OsProcessId, OsHostname, ThreadRandom);
/// let id = generator.try_cuid().unwrap();
/// assert!(cuid::is_cuid(&id));
/// ```
#[derive(Debug, Clone)]
pub struct CuidGenerator<'c, T, P, H, R> {
    counter: &'c Counter,
    time: T,
    pid: P,
    host: H,
    rng: R,
}

impl<'c, T, P, H, R> CuidGenerator<'c, T, P, H, R> {
    /// Creates a generator that draws its counter values from `counter`.
    pub const fn new(counter: &'c Counter, time: T, pid: P, host: H, rng: R) -> Self {
        Self {
            counter,
            time,
            pid,
            host,
            rng,
        }
    }

    /// The counter this generator advances.
    pub fn counter(&self) -> &'c Counter {
        self.counter
    }
}

impl<T, P, H, R> CuidGenerator<'_, T, P, H, R>
where
    T: TimeSource,
    P: ProcessIdSource,
    H: HostnameSource,
    R: RandSource,
{
    /// Current time in milliseconds, base36 encoded without padding.
    ///
    /// The width grows with calendar time: eight digits cover mid-1972 to mid-2059.
    pub fn encode_timestamp(&self) -> Result<String> {
        Ok(base36::encode(self.time.current_millis()?))
    }

    /// Advances the counter and returns its previous value as four base36
    /// digits.
    pub fn encode_counter(&self) -> String {
        base36::left_pad(u64::from(self.counter.next()), BLOCK_SIZE)
    }

    /// Four base36 characters identifying this process and host.
    ///
    /// Computed fresh on every call; nothing is cached.
    pub fn encode_fingerprint(&self) -> Result<String> {
        let pid = self.pid.process_id()?;
        let hostname = self.host.hostname()?;
        Ok(fingerprint(pid, &hostname))
    }

    /// Four base36 digits of non-cryptographic randomness.
    pub fn encode_random_block(&self) -> String {
        let value = self.rng.rand_block() % DISCRETE_VALUES;
        base36::left_pad(u64::from(value), BLOCK_SIZE)
    }

    /// Generates a new CUID.
    ///
    /// # Panics
    /// Panics if the environment cannot be queried. Use [`Self::try_cuid`] to
    /// handle that case.
    pub fn cuid(&self) -> String {
        self.try_cuid().unwrap()
    }

    /// A fallible version of [`Self::cuid`].
    ///
    /// # Errors
    /// Propagates any failure from the clock, process id or hostname query.
    /// Nothing is retried and no partial identifier is returned.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn try_cuid(&self) -> Result<String> {
        let time = self.encode_timestamp()?;
        let count = self.encode_counter();
        let print = self.encode_fingerprint()?;
        let first = self.encode_random_block();
        let second = self.encode_random_block();

        let mut id = String::with_capacity(1 + time.len() + 4 * BLOCK_SIZE);
        id.push(PREFIX);
        id.push_str(&time);
        id.push_str(&count);
        id.push_str(&print);
        id.push_str(&first);
        id.push_str(&second);
        Ok(id)
    }

    /// Generates a short slug.
    ///
    /// # Panics
    /// Panics if the environment cannot be queried. Use [`Self::try_slug`] to
    /// handle that case.
    pub fn slug(&self) -> String {
        self.try_slug().unwrap()
    }

    /// A fallible version of [`Self::slug`].
    ///
    /// A slug is 7 to 10 characters: the last two timestamp digits, the
    /// unpadded counter, the first and last fingerprint characters and two
    /// random digits. It shares the counter with [`Self::try_cuid`] but is far
    /// more collision prone; use it only where brevity matters more than
    /// uniqueness at volume.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn try_slug(&self) -> Result<String> {
        let time = self.encode_timestamp()?;
        let count = base36::encode(u64::from(self.counter.next()));
        let print = self.encode_fingerprint()?;
        let random = self.encode_random_block();

        let mut slug = String::with_capacity(10);
        slug.push_str(tail(&time, 2));
        slug.push_str(tail(&count, BLOCK_SIZE));
        slug.push_str(&print[..1]);
        slug.push_str(tail(&print, 1));
        slug.push_str(tail(&random, 2));
        Ok(slug)
    }
}

/// The last `n` bytes of an ASCII string, or all of it if shorter.
fn tail(s: &str, n: usize) -> &str {
    &s[s.len().saturating_sub(n)..]
}

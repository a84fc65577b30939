use crate::base36::DISCRETE_VALUES;
use portable_atomic::{AtomicU32, Ordering};

/// The process-wide counter shared by [`cuid`] and [`slug`].
///
/// Initialized at compile time, so there is no lazy initialization race.
///
/// [`cuid`]: crate::cuid
/// [`slug`]: crate::slug
pub static COUNTER: Counter = Counter::new();

/// A lock-free counter that cycles through `[0, 36^4)`.
///
/// Each call to [`Counter::next`] returns the value held before the call and
/// stores its successor, wrapping back to zero after `36^4 - 1`. The update is
/// a single compare-and-swap loop so concurrent callers never observe the same
/// value twice within one cycle.
///
/// # Example
/// ```
/// use cuid::Counter;
///
/// let counter = Counter::new();
/// assert_eq!(counter.next(), 0);
/// assert_eq!(counter.next(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Counter {
    #[cfg(feature = "cache-padded")]
    state: crossbeam_utils::CachePadded<AtomicU32>,
    #[cfg(not(feature = "cache-padded"))]
    state: AtomicU32,
}

impl Counter {
    /// Largest value the counter returns before wrapping.
    pub const MAX: u32 = DISCRETE_VALUES - 1;

    /// Creates a counter starting at zero.
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    /// Creates a counter whose first [`Counter::next`] returns `value`.
    ///
    /// Values beyond [`Counter::MAX`] are reduced modulo `36^4`.
    pub const fn starting_at(value: u32) -> Self {
        let value = value % DISCRETE_VALUES;
        Self {
            #[cfg(feature = "cache-padded")]
            state: crossbeam_utils::CachePadded::new(AtomicU32::new(value)),
            #[cfg(not(feature = "cache-padded"))]
            state: AtomicU32::new(value),
        }
    }

    /// Returns the current value and advances the counter by one.
    pub fn next(&self) -> u32 {
        let prev = self
            .state
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |v| {
                Some(if v >= Self::MAX { 0 } else { v + 1 })
            })
            // The closure never returns `None`.
            .unwrap_or_else(|v| v);

        #[cfg(feature = "tracing")]
        if prev == Self::MAX {
            tracing::debug!("cuid counter wrapped to zero");
        }

        prev
    }

    /// Returns the value the next call to [`Counter::next`] will produce.
    pub fn peek(&self) -> u32 {
        self.state.load(Ordering::Acquire)
    }
}

use crate::{Error, Result, TimeSource};
use core::time::Duration;
use std::time::{SystemTime, UNIX_EPOCH};

const NANOS_PER_MILLI: u128 = 1_000_000;
const HALF_MILLI: u128 = NANOS_PER_MILLI / 2;

/// A [`TimeSource`] backed by [`SystemTime`].
///
/// The clock is read with nanosecond resolution and rounded to the nearest
/// millisecond. Exact half-millisecond ties round to the even millisecond.
/// No monotonicity is enforced; if the wall clock steps backwards, so do the
/// timestamps.
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn current_millis(&self) -> Result<u64> {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| Error::Clock)?;
        Ok(round_millis(since_epoch))
    }
}

/// Rounds a duration to whole milliseconds, ties to even.
pub(crate) fn round_millis(elapsed: Duration) -> u64 {
    let nanos = elapsed.as_nanos();
    let millis = nanos / NANOS_PER_MILLI;
    let rem = nanos % NANOS_PER_MILLI;
    let round_up = rem > HALF_MILLI || (rem == HALF_MILLI && millis % 2 == 1);
    (millis + u128::from(round_up)) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_millis_rounds_to_nearest() {
        assert_eq!(round_millis(Duration::from_micros(1_400)), 1);
        assert_eq!(round_millis(Duration::from_micros(1_600)), 2);
        assert_eq!(round_millis(Duration::from_nanos(1_499_999)), 1);
        assert_eq!(round_millis(Duration::from_nanos(1_500_001)), 2);
    }

    #[test]
    fn round_millis_breaks_ties_to_even() {
        assert_eq!(round_millis(Duration::from_micros(500)), 0);
        assert_eq!(round_millis(Duration::from_micros(1_500)), 2);
        assert_eq!(round_millis(Duration::from_micros(2_500)), 2);
        assert_eq!(round_millis(Duration::from_micros(3_500)), 4);
    }

    #[test]
    fn round_millis_keeps_whole_milliseconds() {
        assert_eq!(round_millis(Duration::from_millis(1_700_000_000_000)), 1_700_000_000_000);
    }

    #[test]
    fn system_clock_is_after_2020() {
        // 2020-01-01T00:00:00Z
        let millis = SystemClock.current_millis().unwrap();
        assert!(millis > 1_577_836_800_000);
    }
}

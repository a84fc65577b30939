use crate::Result;

/// A trait for time sources that return wall-clock milliseconds since the
/// Unix epoch.
///
/// This abstraction allows you to plug in the real system clock or a mocked
/// time source in tests.
///
/// # Example
///
/// ```
/// use cuid::{Result, TimeSource};
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn current_millis(&self) -> Result<u64> {
///         Ok(1234)
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.current_millis().unwrap(), 1234);
/// ```
pub trait TimeSource {
    /// Returns the current time in milliseconds since the Unix epoch.
    fn current_millis(&self) -> Result<u64>;
}

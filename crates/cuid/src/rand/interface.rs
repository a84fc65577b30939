/// A trait for random sources that fill the random blocks of an identifier.
///
/// This abstraction allows you to plug in a real random source or a mocked
/// random source in tests. Implementations are not required to be
/// cryptographically secure, and identifiers must not be used as secrets.
///
/// # Example
/// ```
/// use cuid::RandSource;
///
/// struct FixedRand;
/// impl RandSource for FixedRand {
///     fn rand_block(&self) -> u32 {
///         1234
///     }
/// }
///
/// let rng = FixedRand;
/// assert_eq!(rng.rand_block(), 1234);
/// ```
pub trait RandSource {
    /// Returns an integer uniformly distributed in `[0, 36^4)`.
    ///
    /// Values outside that range are reduced modulo `36^4` by the caller.
    fn rand_block(&self) -> u32;
}

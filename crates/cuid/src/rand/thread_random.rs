use crate::{RandSource, base36::DISCRETE_VALUES};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use std::cell::RefCell;

thread_local! {
    /// One fast, non-cryptographic generator per OS thread, seeded from the
    /// thread-local CSPRNG on first use.
    static SMALL_RNG: RefCell<SmallRng> = RefCell::new(SmallRng::from_rng(&mut rand::rng()));
}

/// A [`RandSource`] that draws from a thread-local [`SmallRng`].
///
/// ⚠️ NOTE: `SmallRng` is **not** cryptographically secure. It is fast and
/// statistically adequate for collision resistance, which is all identifier
/// generation needs. Do not use the random blocks as tokens or secrets.
///
/// Each OS thread has its own RNG instance, so calls from multiple threads are
/// contention-free. This type does **not** store the RNG itself; it simply
/// accesses the thread-local generator on each call, so it is `Send + Sync`.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandSource for ThreadRandom {
    fn rand_block(&self) -> u32 {
        SMALL_RNG.with_borrow_mut(|rng| rng.random_range(0..DISCRETE_VALUES))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn rand_block_stays_in_range() {
        for _ in 0..10_000 {
            assert!(ThreadRandom.rand_block() < DISCRETE_VALUES);
        }
    }

    #[test]
    fn rand_block_varies() {
        let values: HashSet<u32> = (0..64).map(|_| ThreadRandom.rand_block()).collect();
        assert!(values.len() > 1);
    }
}

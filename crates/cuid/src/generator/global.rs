//! Process-wide generation using the operating system as the environment.
//!
//! # Example
//! ```
//! let id = cuid::cuid();
//! assert!(id.starts_with('c'));
//! assert!(cuid::is_cuid(&id));
//! ```

use crate::{
    COUNTER, CuidGenerator, OsHostname, OsProcessId, Result, SystemClock, ThreadRandom,
};

/// The generator type behind the free functions.
pub type DefaultGenerator =
    CuidGenerator<'static, SystemClock, OsProcessId, OsHostname, ThreadRandom>;

/// Shared generator reading the system clock, the OS process id and hostname,
/// a thread-local non-cryptographic RNG, and the process-wide [`COUNTER`].
pub static GENERATOR: DefaultGenerator =
    CuidGenerator::new(&COUNTER, SystemClock, OsProcessId, OsHostname, ThreadRandom);

/// Generates a new CUID.
///
/// # Panics
/// Panics if the clock, process id or hostname cannot be read. Use
/// [`try_cuid`] to handle those failures.
pub fn cuid() -> String {
    GENERATOR.cuid()
}

/// A fallible version of [`cuid`].
pub fn try_cuid() -> Result<String> {
    GENERATOR.try_cuid()
}

/// Generates a new slug. See [`CuidGenerator::try_slug`] for its layout.
///
/// # Panics
/// Panics if the clock, process id or hostname cannot be read.
pub fn slug() -> String {
    GENERATOR.slug()
}

/// A fallible version of [`slug`].
pub fn try_slug() -> Result<String> {
    GENERATOR.try_slug()
}

/// The timestamp block for the current time.
pub fn encode_timestamp() -> Result<String> {
    GENERATOR.encode_timestamp()
}

/// Advances the process-wide counter and returns the counter block.
pub fn encode_counter() -> String {
    GENERATOR.encode_counter()
}

/// The fingerprint block for this process and host.
pub fn encode_fingerprint() -> Result<String> {
    GENERATOR.encode_fingerprint()
}

/// One random block.
pub fn encode_random_block() -> String {
    GENERATOR.encode_random_block()
}

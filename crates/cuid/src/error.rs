/// A result type that defaults to the crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All possible errors that `cuid` can produce.
///
/// Generation only fails when the environment cannot answer one of its
/// queries (clock, process id, hostname). These are never retried; the caller
/// decides whether to abort or try again.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The system clock reports a time before the Unix epoch.
    #[error("system clock is before the unix epoch")]
    Clock,

    /// The current process id could not be determined.
    #[error("unable to query the current process id")]
    ProcessId,

    /// The local hostname is unavailable or is not valid Unicode.
    #[error("unable to query the local hostname: {reason}")]
    Hostname {
        /// Why the hostname was rejected.
        reason: &'static str,
    },

    /// A byte outside `[0-9a-z]` was found while decoding base36.
    #[error("invalid base36 byte {byte:#04x} at index {index}")]
    InvalidBase36 {
        /// The offending byte.
        byte: u8,
        /// Position of the byte in the input.
        index: usize,
    },

    /// The decoded base36 value does not fit in a `u64`.
    #[error("base36 value overflows u64")]
    Overflow,
}

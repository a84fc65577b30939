use crate::Result;

/// A trait for querying the id of the calling process.
///
/// The default implementation is [`OsProcessId`]; tests substitute a fixed
/// value.
pub trait ProcessIdSource {
    /// Returns the numeric id of the current process.
    fn process_id(&self) -> Result<u32>;
}

/// A [`ProcessIdSource`] that asks the operating system.
///
/// On Windows this resolves to `GetCurrentProcessId`, on POSIX systems to
/// `getpid`. Targets with no notion of a process (e.g. bare
/// `wasm32-unknown-unknown`) report [`Error::ProcessId`].
///
/// [`Error::ProcessId`]: crate::Error::ProcessId
#[derive(Default, Clone, Copy, Debug)]
pub struct OsProcessId;

#[cfg(any(unix, windows))]
impl ProcessIdSource for OsProcessId {
    fn process_id(&self) -> Result<u32> {
        Ok(std::process::id())
    }
}

#[cfg(not(any(unix, windows)))]
impl ProcessIdSource for OsProcessId {
    fn process_id(&self) -> Result<u32> {
        Err(crate::Error::ProcessId)
    }
}

use crate::{Error, Result};

/// A trait for querying the local hostname.
pub trait HostnameSource {
    /// Returns the hostname of the machine running this process.
    fn hostname(&self) -> Result<String>;
}

/// A [`HostnameSource`] backed by the `gethostname` system call.
#[derive(Default, Clone, Copy, Debug)]
pub struct OsHostname;

impl HostnameSource for OsHostname {
    fn hostname(&self) -> Result<String> {
        gethostname::gethostname()
            .into_string()
            .map_err(|_| Error::Hostname {
                reason: "hostname is not valid unicode",
            })
    }
}

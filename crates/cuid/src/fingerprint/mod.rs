//! Machine and process fingerprinting.
//!
//! The fingerprint is four base36 characters: two derived from the process id
//! followed by two derived from a simple checksum of the hostname. It only
//! lowers the odds of two hosts or processes colliding; it is not a hash in
//! any cryptographic sense.

mod hostname;
mod process_id;

pub use hostname::*;
pub use process_id::*;

use crate::base36;

/// Width of each half of the fingerprint.
pub const HALF_WIDTH: usize = 2;

/// Total fingerprint width.
pub const FINGERPRINT_WIDTH: usize = HALF_WIDTH * 2;

/// Checksum of a hostname: `36 + char count + sum of code points`.
///
/// # Example
/// ```
/// // 36 + 1 + 'a' (97)
/// assert_eq!(cuid::host_sum("a"), 134);
/// assert_eq!(cuid::host_sum(""), 36);
/// ```
pub fn host_sum(hostname: &str) -> u64 {
    hostname
        .chars()
        .fold(base36::BASE, |sum, c| sum + 1 + u64::from(u32::from(c)))
}

/// Builds the fingerprint block from an explicit process id and hostname.
///
/// # Example
/// ```
/// // pid 37 -> "11", host_sum("a") = 134 -> "3q"
/// assert_eq!(cuid::fingerprint(37, "a"), "113q");
/// ```
pub fn fingerprint(pid: u32, hostname: &str) -> String {
    let mut out = base36::fit_right(u64::from(pid), HALF_WIDTH);
    out.push_str(&base36::fit_right(host_sum(hostname), HALF_WIDTH));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_sum_counts_length_and_code_points() {
        // 36 + 4 + (104 + 111 + 115 + 116)
        assert_eq!(host_sum("host"), 486);
        // Multi-byte characters count once each.
        assert_eq!(host_sum("é"), 36 + 1 + 0xe9);
    }

    #[test]
    fn fingerprint_fits_each_half_to_two_chars() {
        // pid 3 -> "03"; 486 -> "di"
        assert_eq!(fingerprint(3, "host"), "03di");
        // pid 1300 -> "104" -> "04"
        assert_eq!(fingerprint(1300, "host"), "04di");
    }

    #[test]
    fn fingerprint_is_always_four_base36_chars() {
        for pid in [0, 1, 35, 36, 99_999, u32::MAX] {
            for host in ["", "localhost", "a-very-long-hostname.example.internal"] {
                let fp = fingerprint(pid, host);
                assert_eq!(fp.len(), FINGERPRINT_WIDTH);
                assert!(base36::is_base36(&fp), "{fp}");
            }
        }
    }
}

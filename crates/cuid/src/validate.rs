use crate::{PREFIX, base36};

/// Shortest possible CUID: prefix, one timestamp digit and four fixed blocks.
pub const MIN_CUID_LEN: usize = 1 + 1 + 4 * base36::BLOCK_SIZE;

/// Shortest possible slug.
pub const MIN_SLUG_LEN: usize = 7;

/// Longest possible slug.
pub const MAX_SLUG_LEN: usize = 10;

/// Returns true if `s` has the shape of a CUID.
///
/// Only the structure is checked: a leading `'c'`, the minimum length, and
/// the lowercase base36 alphabet. Nothing about the blocks is decoded.
///
/// # Example
/// ```
/// assert!(cuid::is_cuid("cloyw3v280000113q0016qglj"));
/// assert!(!cuid::is_cuid("Cloyw3v280000113q0016qglj"));
/// assert!(!cuid::is_cuid("c123"));
/// ```
pub fn is_cuid(s: &str) -> bool {
    s.len() >= MIN_CUID_LEN && s.starts_with(PREFIX) && base36::is_base36(s)
}

/// Returns true if `s` has the shape of a slug.
pub fn is_slug(s: &str) -> bool {
    (MIN_SLUG_LEN..=MAX_SLUG_LEN).contains(&s.len()) && base36::is_base36(s)
}

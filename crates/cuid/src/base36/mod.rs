//! Lowercase base36 formatting.
//!
//! Every block of a CUID is a base36 rendering of an unsigned integer using
//! the digits `0-9` followed by `a-z`. Two width policies are applied on top
//! of the raw encoding: [`left_pad`] for blocks that must be at least `width`
//! characters, and [`fit_right`] for blocks that must be exactly `width`
//! characters even when the value is too large.

mod codec;

pub use codec::*;

/// Number of symbols in the alphabet.
pub const BASE: u64 = 36;

/// Width of the counter and random blocks.
pub const BLOCK_SIZE: usize = 4;

/// Number of distinct values a [`BLOCK_SIZE`] block can hold (`36^4`).
pub const DISCRETE_VALUES: u32 = 1_679_616;

use crate::{Error, Result, base36::BASE};

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const NO_VALUE: u8 = 255;

/// Largest number of base36 digits a `u64` can need.
const MAX_DIGITS: usize = 13;

/// Lookup table for base36 decoding. Only lowercase letters are accepted,
/// matching the alphabet identifiers are emitted in.
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    while i < 36 {
        lut[ALPHABET[i as usize] as usize] = i;
        i += 1;
    }
    lut
};

/// Encodes `value` using the minimum number of base36 digits.
///
/// Zero encodes to `"0"`.
///
/// # Example
/// ```
/// assert_eq!(cuid::base36::encode(0), "0");
/// assert_eq!(cuid::base36::encode(35), "z");
/// assert_eq!(cuid::base36::encode(1300), "104");
/// ```
pub fn encode(mut value: u64) -> String {
    let mut buf = [0_u8; MAX_DIGITS];
    let mut start = MAX_DIGITS;
    loop {
        start -= 1;
        buf[start] = ALPHABET[(value % BASE) as usize];
        value /= BASE;
        if value == 0 {
            break;
        }
    }
    // Every byte comes from `ALPHABET`, which is ASCII.
    buf[start..].iter().map(|&b| char::from(b)).collect()
}

/// Encodes `value` and prepends `'0'` until the result is at least `width`
/// characters long. Longer encodings are returned untouched.
///
/// # Example
/// ```
/// assert_eq!(cuid::base36::left_pad(0, 4), "0000");
/// assert_eq!(cuid::base36::left_pad(1_679_615, 4), "zzzz");
/// ```
pub fn left_pad(value: u64, width: usize) -> String {
    pad(encode(value), width)
}

/// Encodes `value` into exactly `width` characters: the rightmost `width`
/// digits when the encoding is longer, zero-padded on the left when shorter.
///
/// # Example
/// ```
/// assert_eq!(cuid::base36::fit_right(37, 2), "11");
/// assert_eq!(cuid::base36::fit_right(3, 2), "03");
/// assert_eq!(cuid::base36::fit_right(1300, 2), "04");
/// ```
pub fn fit_right(value: u64, width: usize) -> String {
    let encoded = encode(value);
    match encoded.len().checked_sub(width) {
        Some(excess) => encoded[excess..].into(),
        None => pad(encoded, width),
    }
}

/// Decodes a lowercase base36 string.
///
/// An empty input decodes to zero.
///
/// # Errors
/// - [`Error::InvalidBase36`] if a byte is not in `[0-9a-z]`
/// - [`Error::Overflow`] if the value does not fit in a `u64`
pub fn decode(encoded: &str) -> Result<u64> {
    encoded.bytes().enumerate().try_fold(0_u64, |acc, (index, byte)| {
        let digit = LOOKUP[byte as usize];
        if digit == NO_VALUE {
            return Err(Error::InvalidBase36 { byte, index });
        }
        acc.checked_mul(BASE)
            .and_then(|acc| acc.checked_add(u64::from(digit)))
            .ok_or(Error::Overflow)
    })
}

/// Returns true if every byte of `s` is in the base36 alphabet.
pub fn is_base36(s: &str) -> bool {
    s.bytes().all(|b| LOOKUP[b as usize] != NO_VALUE)
}

fn pad(encoded: String, width: usize) -> String {
    let missing = width.saturating_sub(encoded.len());
    if missing == 0 {
        return encoded;
    }
    let mut out = String::with_capacity(width);
    out.extend(core::iter::repeat_n('0', missing));
    out.push_str(&encoded);
    out
}

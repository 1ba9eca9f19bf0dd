//! Positional base62 encoding of 32-bit fingerprints.
//!
//! The alphabet order is part of the public contract: every issued short code
//! depends on it, so it must never be permuted.

/// Digits, then uppercase, then lowercase.
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Length of the longest encoding, `encode(u32::MAX)`.
pub const MAX_ENCODED_LEN: usize = 6;

const BASE: u32 = ALPHABET.len() as u32;

/// Encodes `n` as the shortest base62 string with no leading zero symbol.
///
/// Zero encodes to `"0"` rather than the empty string.
///
/// # Examples
///
/// ```
/// use tinylink_core::base62;
///
/// assert_eq!(base62::encode(0), "0");
/// assert_eq!(base62::encode(61), "z");
/// assert_eq!(base62::encode(62), "10");
/// ```
pub fn encode(mut n: u32) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let mut buf = [0u8; MAX_ENCODED_LEN];
    let mut start = buf.len();
    while n > 0 {
        start -= 1;
        buf[start] = ALPHABET[(n % BASE) as usize];
        n /= BASE;
    }

    buf[start..].iter().map(|&b| b as char).collect()
}

/// Decodes a base62 string back into the value it encodes.
///
/// Returns `None` for empty input, symbols outside the alphabet and values
/// that do not fit in a `u32`. Leading zero symbols are accepted here;
/// canonical form is the caller's concern.
pub fn decode(code: &str) -> Option<u32> {
    if code.is_empty() {
        return None;
    }

    code.bytes().try_fold(0u32, |acc, b| {
        acc.checked_mul(BASE)?.checked_add(symbol_value(b)?)
    })
}

fn symbol_value(b: u8) -> Option<u32> {
    match b {
        b'0'..=b'9' => Some(u32::from(b - b'0')),
        b'A'..=b'Z' => Some(u32::from(b - b'A') + 10),
        b'a'..=b'z' => Some(u32::from(b - b'a') + 36),
        _ => None,
    }
}

/// Returns `true` if `c` belongs to the base62 alphabet.
pub fn is_symbol(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

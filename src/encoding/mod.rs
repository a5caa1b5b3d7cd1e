//! Percent-decoding of raw input text and re-encoding of decoded
//! components for rendering.
//!
//! [`decode`] is the single raw-to-semantic boundary of the library: the
//! parser and builder run every userinfo, path, query and fragment token
//! through it exactly once. Re-encoding is internal to rendering; this
//! library never stores encoded text in its data model.

pub(crate) mod table;

use table::Table;

/// Percent-decodes a string.
///
/// Scans byte by byte: any `%` followed by two hex digits emits the
/// decoded byte; a `%` *not* followed by two hex digits is copied through
/// literally rather than rejected. Decoded byte runs merge with raw UTF-8
/// multi-byte sequences; byte sequences that do not form valid UTF-8
/// decode to the replacement character.
///
/// Decoding is idempotent on text containing no literal `%`.
///
/// # Examples
///
/// ```
/// use http_url::encoding::decode;
///
/// assert_eq!(decode("a%20b"), "a b");
/// assert_eq!(decode("100%"), "100%");
/// assert_eq!(decode("%C3%A9"), "é");
/// ```
#[must_use]
pub fn decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let cur = bytes[i];
        if cur == b'%' && i + 2 < bytes.len() && is_hex(bytes[i + 1]) && is_hex(bytes[i + 2]) {
            out.push(hex_value(bytes[i + 1]) << 4 | hex_value(bytes[i + 2]));
            i += 3;
        } else {
            out.push(cur);
            i += 1;
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Percent-encodes the ASCII characters of a decoded component string
/// that the table does not allow literally. Non-ASCII code points pass
/// through unencoded.
pub(crate) fn encode(input: &str, table: &Table) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if ch.is_ascii() && !table.allows(ch as u8) {
            push_pct(&mut out, ch as u8);
        } else {
            out.push(ch);
        }
    }
    out
}

fn is_hex(byte: u8) -> bool {
    byte.is_ascii_hexdigit()
}

fn hex_value(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        _ => byte - b'A' + 10,
    }
}

fn push_pct(out: &mut String, byte: u8) {
    const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";
    out.push('%');
    out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
    out.push(HEX_DIGITS[(byte & 15) as usize] as char);
}

//! Byte pattern tables determining which ASCII characters may appear
//! literally in each rendered URL component.
//!
//! The predefined tables follow the per-component legal character sets
//! of [RFC 2396], which is what conventional URI-string constructors
//! quote against.
//!
//! [RFC 2396]: https://datatracker.ietf.org/doc/html/rfc2396/

/// A table determining the ASCII bytes allowed unencoded in a component.
///
/// `%` is never allowed; it always re-encodes as `%25`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Table {
    arr: [bool; 128],
}

impl Table {
    /// Generates a table that only allows the given bytes.
    ///
    /// # Panics
    ///
    /// Panics if any of the bytes is not ASCII or is `%`.
    const fn gen(mut bytes: &[u8]) -> Table {
        let mut arr = [false; 128];
        while let [cur, rem @ ..] = bytes {
            assert!(cur.is_ascii() && *cur != b'%', "non-ASCII or %");
            arr[*cur as usize] = true;
            bytes = rem;
        }
        Table { arr }
    }

    /// Marks the ASCII alphanumeric bytes as allowed.
    const fn alphanumeric(mut self) -> Table {
        let mut i = 0;
        while i < 128 {
            let b = i as u8;
            if b.is_ascii_alphanumeric() {
                self.arr[i] = true;
            }
            i += 1;
        }
        self
    }

    /// Combines two tables into one allowing the union of both.
    const fn or(mut self, other: &Table) -> Table {
        let mut i = 0;
        while i < 128 {
            self.arr[i] |= other.arr[i];
            i += 1;
        }
        self
    }

    /// Returns `true` if the byte may appear literally.
    pub(crate) const fn allows(&self, byte: u8) -> bool {
        byte < 0x80 && self.arr[byte as usize]
    }
}

/// unreserved = alphanum | mark
const UNRESERVED: Table = Table::gen(b"-_.!~*'()").alphanumeric();

/// Characters allowed literally in the userinfo component.
pub(crate) const USERINFO: Table = UNRESERVED.or(&Table::gen(b";:&=+$,"));

/// Characters allowed literally in the path component.
pub(crate) const PATH: Table = UNRESERVED.or(&Table::gen(b";:@&=+$,/"));

/// Characters allowed literally in the query component.
pub(crate) const QUERY: Table = PATH.or(&Table::gen(b"?"));

/// Characters allowed literally in the fragment component.
pub(crate) const FRAGMENT: Table = QUERY;

use crate::utils::unquote;

/// Byte that may not appear in a tag key besides space, `:` and `"`.
const DEL: u8 = 0x7f;

/// Splits a raw tag into `(key, quoted value)` pairs, left to right.
///
/// The first syntax error ends the iteration: an empty key, a key not followed
/// by `:"`, or a value without its closing quote. Pairs before the break are
/// still yielded, and `broken` keeps the text from the offending key onward.
struct Pairs<'a> {
    rest:   &'a [u8],
    broken: Option<&'a [u8]>,
}

impl<'a> Iterator for Pairs<'a> {
    type Item = (&'a [u8], &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.rest;

        // Skip leading space.
        let mut i = 0;
        while i < tag.len() && tag[i] == b' ' {
            i += 1;
        }
        let tag = &tag[i..];
        if tag.is_empty() {
            self.rest = tag;
            return None;
        }
        let start = tag;

        // Scan to colon. A space, a quote or a control character is a syntax error.
        // Only the single-byte DEL is rejected; multi-byte control characters are
        // left alone since we inspect bytes, not chars.
        i = 0;
        while i < tag.len() && tag[i] > b' ' && tag[i] != b':' && tag[i] != b'"' && tag[i] != DEL {
            i += 1;
        }
        if i == 0 || i + 1 >= tag.len() || tag[i] != b':' || tag[i + 1] != b'"' {
            self.rest = &[];
            self.broken = Some(start);
            return None;
        }
        let name = &tag[..i];
        let tag = &tag[i + 1..];

        // Scan quoted string to find value.
        i = 1;
        while i < tag.len() && tag[i] != b'"' {
            if tag[i] == b'\\' {
                i += 1;
            }
            i += 1;
        }
        if i >= tag.len() {
            self.rest = &[];
            self.broken = Some(start);
            return None;
        }
        let quoted = &tag[..=i];
        self.rest = &tag[i + 1..];

        Some((name, quoted))
    }
}

fn pairs(tag: &str) -> Pairs<'_> {
    Pairs {
        rest:   tag.as_bytes(),
        broken: None,
    }
}

/// Returns the unquoted value stored under `key` in a `key:"value" ...` tag.
///
/// Unrelated keys are skipped. Returns `None` when the key is absent, when a
/// syntax error stops the scan before it, or when the matched value is not a
/// valid string literal.
pub fn lookup(tag: &str, key: &str) -> Option<String> {
    for (name, quoted) in pairs(tag) {
        if name == key.as_bytes() {
            // Quotes are ASCII, so slicing on them keeps the value valid UTF-8.
            return std::str::from_utf8(quoted).ok().and_then(unquote);
        }
    }
    None
}

/// Reports whether `key` is used as a pair key, regardless of whether its
/// value can be unquoted.
///
/// Text inside another key's quoted value never counts. A scan that breaks
/// on `key:` itself (`enum:Red`, `enum:"Red`) does.
pub fn has_key(tag: &str, key: &str) -> bool {
    let key = key.as_bytes();
    let mut scan = pairs(tag);
    if scan.by_ref().any(|(name, _)| name == key) {
        return true;
    }
    scan.broken
        .is_some_and(|rest| rest.len() > key.len() && rest.starts_with(key) && rest[key.len()] == b':')
}

use alloc::string::String;
use alloc::vec::Vec;

use crate::consts::{ENTRY_SEP, PAIR_SEP};
use crate::error::Error;
use crate::escape::unescape;
use crate::types::KvMap;

use super::split::{split_pair, split_unescaped};

/// Decode a document into every `(key, value)` pair, in document order and
/// with duplicate keys preserved.
///
/// Each `,`-separated segment must contain exactly one unescaped `=`;
/// otherwise the call fails with `MalformedDocument` at the byte offset of
/// that segment and nothing is returned. `""` decodes to no pairs.
pub fn decode_pairs(input: &str) -> Result<Vec<(String, String)>, Error> {
    let mut pairs = Vec::new();
    if input.is_empty() {
        return Ok(pairs);
    }

    for (offset, segment) in split_unescaped(input, ENTRY_SEP) {
        let (key, value) =
            split_pair(segment, PAIR_SEP).ok_or_else(|| Error::malformed(offset))?;
        pairs.push((unescape(key), unescape(value)));
    }

    Ok(pairs)
}

/// Decode a document into a [`KvMap`].
///
/// A key that appears more than once keeps the position of its first
/// occurrence and the value of its last.
///
/// ```
/// use kvpack_codec::decode;
///
/// let map = decode("a=1,b=2").unwrap();
/// assert_eq!(map.get("a"), Some("1"));
/// assert_eq!(map.get("b"), Some("2"));
/// assert!(decode("a=b=c").is_err());
/// ```
pub fn decode(input: &str) -> Result<KvMap, Error> {
    let pairs = decode_pairs(input)?;
    let mut map = KvMap::with_capacity(pairs.len());
    map.extend(pairs);
    Ok(map)
}

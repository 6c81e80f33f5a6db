use alloc::string::String;

use crate::consts::{ENTRY_SEP, ESCAPE_PATTERNS, ESCAPE_REPLACEMENTS, PAIR_SEP};
use crate::error::Error;
use crate::escape::escape;
use crate::replace::replace;
use crate::types::{KvMap, Value};

/// Encode an ordered sequence of key-value pairs into a document.
///
/// Keys and values must be strings or integers; integers are written in
/// decimal. Any other [`Value`] fails the whole call with `InvalidInput` at
/// the index of the offending entry. An empty sequence encodes to `""`.
///
/// ```
/// use kvpack_codec::encode;
///
/// assert_eq!(encode([("a", "1"), ("b", "2")]).unwrap(), "a=1,b=2");
/// assert_eq!(encode([("a,b", "c=d")]).unwrap(), "a\\,b=c\\=d");
/// ```
pub fn encode<'a, I, K, V>(entries: I) -> Result<String, Error>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<Value<'a>>,
    V: Into<Value<'a>>,
{
    let mut out = String::new();

    for (index, (key, value)) in entries.into_iter().enumerate() {
        let key = escape_value(&key.into(), index)?;
        let value = escape_value(&value.into(), index)?;

        if index > 0 {
            out.push(char::from(ENTRY_SEP));
        }
        out.push_str(&key);
        out.push(char::from(PAIR_SEP));
        out.push_str(&value);
    }

    Ok(out)
}

/// Encode an already string-typed map. Cannot fail.
#[must_use]
pub fn encode_map(map: &KvMap) -> String {
    let mut out = String::new();

    for (index, (key, value)) in map.iter().enumerate() {
        if index > 0 {
            out.push(char::from(ENTRY_SEP));
        }
        out.push_str(&escape(key));
        out.push(char::from(PAIR_SEP));
        out.push_str(&escape(value));
    }

    out
}

fn escape_value(value: &Value<'_>, index: usize) -> Result<String, Error> {
    replace(&ESCAPE_PATTERNS, &ESCAPE_REPLACEMENTS, value)
        .map_err(|_| Error::invalid_input(index))
}

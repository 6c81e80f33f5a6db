use alloc::string::String;

use crate::consts::{ESCAPE, ESCAPE_PATTERNS, ESCAPE_REPLACEMENTS, RESERVED};
use crate::replace::replace_str;

/// Returns `true` if the string contains a byte that must be escaped.
#[must_use]
pub fn needs_escape(s: &str) -> bool {
    s.bytes().any(|b| RESERVED.contains(&b))
}

/// Returns `true` if the string contains any backslash escape sequences.
#[must_use]
pub fn needs_unescape(s: &str) -> bool {
    s.as_bytes().contains(&ESCAPE)
}

/// Escape a key or value: `\` → `\\`, `,` → `\,`, `=` → `\=`.
///
/// Escaping is not idempotent: escaping an escaped string doubles every
/// backslash again.
#[must_use]
pub fn escape(s: &str) -> String {
    if !needs_escape(s) {
        return String::from(s);
    }
    replace_str(&ESCAPE_PATTERNS, &ESCAPE_REPLACEMENTS, s)
}

/// Unescape a single key or value.
///
/// A backslash followed by any character other than a line feed is dropped
/// and the character kept. A backslash before a line feed, or at the very
/// end of the input, is kept as-is.
#[must_use]
pub fn unescape(s: &str) -> String {
    if !needs_unescape(s) {
        return String::from(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some(&next) if next != '\n' => {
                out.push(next);
                chars.next();
            }
            _ => out.push('\\'),
        }
    }

    out
}

//! Stock validators for [`crate::check::check_and_convert`].

use alloc::string::{String, ToString};

/// Accept a decimal integer that fits in `i64` (optional sign, leading zeros
/// allowed) and return its canonical form.
#[must_use]
pub fn integer(value: &str) -> Option<String> {
    value.parse::<i64>().ok().map(|n| n.to_string())
}

/// Accept a boolean spelling and normalize it to `"1"` or `"0"`.
///
/// Recognized (ASCII case-insensitive): `1`/`0`, `true`/`false`, `yes`/`no`,
/// `on`/`off`.
#[must_use]
pub fn boolean(value: &str) -> Option<String> {
    const TRUE: [&str; 4] = ["1", "true", "yes", "on"];
    const FALSE: [&str; 4] = ["0", "false", "no", "off"];

    if TRUE.iter().any(|t| value.eq_ignore_ascii_case(t)) {
        Some(String::from("1"))
    } else if FALSE.iter().any(|f| value.eq_ignore_ascii_case(f)) {
        Some(String::from("0"))
    } else {
        None
    }
}

/// Pass any non-empty value through unchanged.
#[must_use]
pub fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(String::from(value))
    }
}

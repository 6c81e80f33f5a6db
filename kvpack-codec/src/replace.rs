use alloc::string::String;

use crate::error::Error;
use crate::types::Value;

/// Replace every occurrence of `patterns[i]` with `replacements[i]` in a
/// single left-to-right pass over `input`.
///
/// At each position the first pattern (in slice order) that matches wins and
/// scanning resumes after it, so substituted text is never re-scanned.
/// Empty patterns never match.
///
/// Fails with `InvalidInput` if `input` is not a string or integer (position
/// 0), or if the slices differ in length (position = the shorter length).
pub fn replace(
    patterns: &[&str],
    replacements: &[&str],
    input: &Value<'_>,
) -> Result<String, Error> {
    if patterns.len() != replacements.len() {
        return Err(Error::invalid_input(patterns.len().min(replacements.len())));
    }
    let text = input.as_text().ok_or_else(|| Error::invalid_input(0))?;
    Ok(replace_str(patterns, replacements, &text))
}

/// Infallible form of [`replace`] for string input. Extra patterns without a
/// replacement are ignored.
#[must_use]
pub fn replace_str(patterns: &[&str], replacements: &[&str], input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    'outer: while !rest.is_empty() {
        for (pat, rep) in patterns.iter().zip(replacements) {
            if !pat.is_empty() && rest.starts_with(pat) {
                out.push_str(rep);
                rest = &rest[pat.len()..];
                continue 'outer;
            }
        }
        // No pattern here: copy one char.
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            out.push(c);
        }
        rest = chars.as_str();
    }

    out
}

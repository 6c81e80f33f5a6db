use alloc::string::String;

use crate::error::CheckError;
use crate::types::KvMap;

/// Validates and converts a single value.
///
/// Returns the converted value, or `None` to reject it.
pub trait Validator {
    fn validate(&self, value: &str) -> Option<String>;
}

impl<F> Validator for F
where
    F: Fn(&str) -> Option<String>,
{
    fn validate(&self, value: &str) -> Option<String> {
        self(value)
    }
}

/// A key paired with the validator for its value.
pub type Rule<'a> = (&'a str, &'a dyn Validator);

/// Check that `map` has exactly the keys of `rules`, in the same order, and
/// run each rule's validator over its value.
///
/// On success every value in `map` is replaced by its converted form. On
/// failure `map` is left untouched.
pub fn check_and_convert(map: &mut KvMap, rules: &[Rule<'_>]) -> Result<(), CheckError> {
    let mismatch = map
        .keys()
        .zip(rules.iter().map(|(key, _)| *key))
        .position(|(actual, expected)| actual != expected);
    if let Some(index) = mismatch {
        return Err(CheckError::key_mismatch(index));
    }
    if map.len() != rules.len() {
        return Err(CheckError::key_mismatch(map.len().min(rules.len())));
    }

    let mut converted = KvMap::with_capacity(map.len());
    for (index, ((key, value), (_, validator))) in map.iter().zip(rules).enumerate() {
        let value = validator
            .validate(value)
            .ok_or_else(|| CheckError::rejected(index))?;
        converted.insert(key, value);
    }

    *map = converted;
    Ok(())
}

use crate::consts::ESCAPE;

/// Find the first `sep` at or after `from` that is not escaped.
///
/// A backslash always consumes the byte after it, so a run of backslashes
/// escapes the following byte only when its length is odd.
fn find_unescaped(bytes: &[u8], sep: u8, from: usize) -> Option<usize> {
    let mut i = from;
    while i < bytes.len() {
        if bytes[i] == ESCAPE && i + 1 < bytes.len() {
            i += 2;
            continue;
        }
        if bytes[i] == sep {
            return Some(i);
        }
        i += 1;
    }
    None
}

/// Iterator over the pieces of a string split on unescaped `sep` bytes.
///
/// Yields `(byte offset, piece)`. An input with `n` unescaped separators
/// always yields `n + 1` pieces, some of which may be empty.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    input: &'a str,
    sep: u8,
    pos: usize,
    done: bool,
}

impl<'a> Iterator for Segments<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let start = self.pos;
        match find_unescaped(self.input.as_bytes(), self.sep, start) {
            Some(end) => {
                self.pos = end + 1;
                Some((start, &self.input[start..end]))
            }
            None => {
                self.done = true;
                Some((start, &self.input[start..]))
            }
        }
    }
}

/// Split `input` on every unescaped `sep` (an ASCII byte).
#[must_use]
pub fn split_unescaped(input: &str, sep: u8) -> Segments<'_> {
    Segments {
        input,
        sep,
        pos: 0,
        done: false,
    }
}

/// Split a segment on its single unescaped `sep`.
///
/// Returns `None` unless exactly one unescaped `sep` is present.
#[must_use]
pub fn split_pair(segment: &str, sep: u8) -> Option<(&str, &str)> {
    let bytes = segment.as_bytes();
    let at = find_unescaped(bytes, sep, 0)?;
    if find_unescaped(bytes, sep, at + 1).is_some() {
        return None;
    }
    Some((&segment[..at], &segment[at + 1..]))
}

use core::fmt;

/// Specific kind of codec error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A key, value or replace input is not a string or integer, or the
    /// pattern and replacement lists differ in length.
    InvalidInput,
    /// A decoded segment does not contain exactly one unescaped `=`.
    MalformedDocument,
}

/// Error returned by the encoder, decoder and replace helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error {
    pub kind: ErrorKind,
    /// For encoding: index of the offending entry (or pattern).
    /// For decoding: byte offset of the offending segment in the input.
    pub position: usize,
}

impl Error {
    #[must_use]
    pub fn new(kind: ErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    #[must_use]
    pub fn invalid_input(position: usize) -> Self {
        Self::new(ErrorKind::InvalidInput, position)
    }

    #[must_use]
    pub fn malformed(position: usize) -> Self {
        Self::new(ErrorKind::MalformedDocument, position)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::InvalidInput => write!(f, "invalid input at entry {}", self.position),
            ErrorKind::MalformedDocument => {
                write!(f, "malformed document at byte {}", self.position)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Specific kind of check error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckErrorKind {
    /// Mapping keys differ from the validator keys (name, count or order).
    KeyMismatch,
    /// A validator refused its value.
    Rejected,
}

/// Error returned by [`crate::check::check_and_convert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckError {
    pub kind: CheckErrorKind,
    /// Index of the first mismatching or rejected entry.
    pub position: usize,
}

impl CheckError {
    #[must_use]
    pub fn key_mismatch(position: usize) -> Self {
        Self {
            kind: CheckErrorKind::KeyMismatch,
            position,
        }
    }

    #[must_use]
    pub fn rejected(position: usize) -> Self {
        Self {
            kind: CheckErrorKind::Rejected,
            position,
        }
    }
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CheckErrorKind::KeyMismatch => write!(f, "key mismatch at entry {}", self.position),
            CheckErrorKind::Rejected => write!(f, "value rejected at entry {}", self.position),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CheckError {}

/// Escape prefix.
pub const ESCAPE: u8 = b'\\';

/// Separator between entries.
pub const ENTRY_SEP: u8 = b',';

/// Separator between a key and its value.
pub const PAIR_SEP: u8 = b'=';

/// Bytes that must be prefixed with [`ESCAPE`] inside keys and values.
pub const RESERVED: &[u8] = b"\\,=";

/// Patterns substituted by the encoder, in match priority order.
pub const ESCAPE_PATTERNS: [&str; 3] = ["\\", ",", "="];

/// Replacements for [`ESCAPE_PATTERNS`], index for index.
pub const ESCAPE_REPLACEMENTS: [&str; 3] = ["\\\\", "\\,", "\\="];

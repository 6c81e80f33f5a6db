pub mod document;
pub mod split;

pub use document::{decode, decode_pairs};
pub use split::{Segments, split_pair, split_unescaped};

pub mod document;

pub use document::{encode, encode_map};

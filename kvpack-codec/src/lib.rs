#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod check;
pub mod consts;
pub mod error;
pub mod escape;
pub mod replace;
pub mod types;
pub mod validate;

pub mod build;
pub mod parse;

pub use error::{CheckError, CheckErrorKind, Error, ErrorKind};
pub use types::{KvMap, Value};

pub use build::{encode, encode_map};
pub use parse::{decode, decode_pairs};

pub use check::{Rule, Validator, check_and_convert};
pub use escape::{escape, unescape};
pub use replace::replace;

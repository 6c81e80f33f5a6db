//! C ABI bridge for kvpack-codec.
//!
//! Exposes encode/decode/escape through `extern "C"` so that other language
//! bindings can call a single shared implementation. Strings cross the
//! boundary as `(ptr, len)` pairs and are never null-terminated; all output
//! goes into caller-provided buffers.

use std::ffi::c_char;
use std::slice;
use std::str;

use kvpack_codec::{Error, ErrorKind, Value};

// ---------------------------------------------------------------------------
// Result codes (negative = error, 0 = success, positive = bytes/pairs written)
// ---------------------------------------------------------------------------

pub const KVPACK_OK: i32 = 0;
pub const KVPACK_ERR_INVALID_INPUT: i32 = -1;
pub const KVPACK_ERR_MALFORMED_DOCUMENT: i32 = -2;
pub const KVPACK_ERR_BUFFER_TOO_SMALL: i32 = -3;
pub const KVPACK_ERR_TOO_MANY_PAIRS: i32 = -4;

// ---------------------------------------------------------------------------
// C-compatible types
// ---------------------------------------------------------------------------

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KvpackValueTag {
    Str = 0,
    Int = 1,
    Float = 2,
    Bool = 3,
    Null = 4,
}

/// A borrowed string slice (pointer + length, NOT null-terminated).
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct KvpackStr {
    pub ptr: *const u8,
    pub len: usize,
}

impl KvpackStr {
    fn empty() -> Self {
        Self {
            ptr: std::ptr::null(),
            len: 0,
        }
    }
}

/// A tagged input value. Only `Str` and `Int` are encodable.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct KvpackValue {
    pub tag: KvpackValueTag,
    /// For `Str`.
    pub str_val: KvpackStr,
    /// For `Int`, and `Bool` (non-zero = true).
    pub int_val: i64,
    /// For `Float`.
    pub float_val: f64,
}

/// An input entry for [`kvpack_encode`].
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct KvpackEntry {
    pub key: KvpackValue,
    pub value: KvpackValue,
}

/// A decoded pair. Both strings point into the caller's scratch buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct KvpackPair {
    pub key: KvpackStr,
    pub value: KvpackStr,
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

fn error_to_code(e: &Error) -> i32 {
    match e.kind {
        ErrorKind::InvalidInput => KVPACK_ERR_INVALID_INPUT,
        ErrorKind::MalformedDocument => KVPACK_ERR_MALFORMED_DOCUMENT,
    }
}

/// # Safety
/// `ptr` must be valid for `len` bytes, or `len` must be 0.
unsafe fn bytes_from_raw<'a>(ptr: *const u8, len: usize) -> &'a [u8] {
    if ptr.is_null() || len == 0 {
        &[]
    } else {
        unsafe { slice::from_raw_parts(ptr, len) }
    }
}

/// # Safety
/// `ptr` must be valid for writes of `len` bytes, or `len` must be 0.
unsafe fn buf_from_raw<'a>(ptr: *mut u8, len: usize) -> &'a mut [u8] {
    if ptr.is_null() || len == 0 {
        &mut []
    } else {
        unsafe { slice::from_raw_parts_mut(ptr, len) }
    }
}

/// # Safety
/// `ptr` must be valid for `len` bytes, or `len` must be 0.
unsafe fn str_from_raw<'a>(ptr: *const u8, len: usize) -> Option<&'a str> {
    str::from_utf8(unsafe { bytes_from_raw(ptr, len) }).ok()
}

/// # Safety
/// `str_val` of a `Str` value must be valid for its length.
unsafe fn convert_value<'a>(v: &KvpackValue) -> Option<Value<'a>> {
    Some(match v.tag {
        KvpackValueTag::Str => {
            Value::Str(unsafe { str_from_raw(v.str_val.ptr, v.str_val.len) }?)
        }
        KvpackValueTag::Int => Value::Int(v.int_val),
        KvpackValueTag::Float => Value::Float(v.float_val),
        KvpackValueTag::Bool => Value::Bool(v.int_val != 0),
        KvpackValueTag::Null => Value::Null,
    })
}

/// Copy `data` to the start of `buf`, returning the byte count as a result code.
fn copy_out(data: &str, buf: &mut [u8]) -> i32 {
    let Ok(n) = i32::try_from(data.len()) else {
        return KVPACK_ERR_BUFFER_TOO_SMALL;
    };
    if data.len() > buf.len() {
        return KVPACK_ERR_BUFFER_TOO_SMALL;
    }
    buf[..data.len()].copy_from_slice(data.as_bytes());
    n
}

/// A cursor-based writer into the caller's scratch buffer.
struct ScratchWriter<'buf> {
    buf: &'buf mut [u8],
    pos: usize,
}

impl<'buf> ScratchWriter<'buf> {
    fn new(buf: &'buf mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Append a string and return a view of the stored copy.
    fn write_str(&mut self, s: &str) -> Result<KvpackStr, i32> {
        if s.is_empty() {
            return Ok(KvpackStr::empty());
        }
        let end = self.pos + s.len();
        if end > self.buf.len() {
            return Err(KVPACK_ERR_BUFFER_TOO_SMALL);
        }
        self.buf[self.pos..end].copy_from_slice(s.as_bytes());
        let view = KvpackStr {
            ptr: self.buf[self.pos..].as_ptr(),
            len: s.len(),
        };
        self.pos = end;
        Ok(view)
    }
}

// ---------------------------------------------------------------------------
// FFI functions
// ---------------------------------------------------------------------------

/// Encode entries into a document.
///
/// # Safety
/// - `entries` must point to `entries_len` valid `KvpackEntry` values (or be
///   null with `entries_len == 0`); every `Str` value must be readable.
/// - `buf_ptr` must point to a writeable buffer of at least `buf_len` bytes.
///
/// Returns bytes written on success, negative error code on failure.
/// Non-UTF-8 strings are reported as `KVPACK_ERR_INVALID_INPUT`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn kvpack_encode(
    entries: *const KvpackEntry,
    entries_len: usize,
    buf_ptr: *mut u8,
    buf_len: usize,
) -> i32 {
    let entries: &[KvpackEntry] = if entries.is_null() || entries_len == 0 {
        &[]
    } else {
        unsafe { slice::from_raw_parts(entries, entries_len) }
    };

    let mut values = Vec::with_capacity(entries.len());
    for entry in entries {
        let key = unsafe { convert_value(&entry.key) };
        let value = unsafe { convert_value(&entry.value) };
        match (key, value) {
            (Some(k), Some(v)) => values.push((k, v)),
            _ => return KVPACK_ERR_INVALID_INPUT,
        }
    }

    let doc = match kvpack_codec::encode(values) {
        Ok(d) => d,
        Err(e) => return error_to_code(&e),
    };

    let buf = unsafe { buf_from_raw(buf_ptr, buf_len) };
    copy_out(&doc, buf)
}

/// Decode a document into pairs.
///
/// Duplicate keys are collapsed (first position, last value). Decoded strings
/// are copied into `scratch_ptr`; the returned pairs point into it and stay
/// valid as long as the scratch buffer does.
///
/// # Safety
/// - `input_ptr` must point to `input_len` readable bytes.
/// - `out_pairs` must point to at least `max_pairs` writeable `KvpackPair`s.
/// - `scratch_ptr` must point to a writeable buffer of at least `scratch_len` bytes.
///
/// Returns the number of pairs written on success, negative error code on failure.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn kvpack_decode(
    input_ptr: *const u8,
    input_len: usize,
    out_pairs: *mut KvpackPair,
    max_pairs: usize,
    scratch_ptr: *mut u8,
    scratch_len: usize,
) -> i32 {
    let Some(input) = (unsafe { str_from_raw(input_ptr, input_len) }) else {
        return KVPACK_ERR_INVALID_INPUT;
    };

    let map = match kvpack_codec::decode(input) {
        Ok(m) => m,
        Err(e) => return error_to_code(&e),
    };

    if map.len() > max_pairs {
        return KVPACK_ERR_TOO_MANY_PAIRS;
    }
    let Ok(count) = i32::try_from(map.len()) else {
        return KVPACK_ERR_TOO_MANY_PAIRS;
    };
    if map.is_empty() {
        return KVPACK_OK;
    }

    let out = unsafe { slice::from_raw_parts_mut(out_pairs, max_pairs) };
    let scratch = unsafe { buf_from_raw(scratch_ptr, scratch_len) };
    let mut w = ScratchWriter::new(scratch);

    for (slot, (key, value)) in out.iter_mut().zip(map.iter()) {
        let key = match w.write_str(key) {
            Ok(s) => s,
            Err(code) => return code,
        };
        let value = match w.write_str(value) {
            Ok(s) => s,
            Err(code) => return code,
        };
        *slot = KvpackPair { key, value };
    }

    count
}

/// Escape a single key or value.
///
/// # Safety
/// - `input_ptr` must point to `input_len` readable bytes.
/// - `buf_ptr` must point to a writeable buffer of at least `buf_len` bytes.
///
/// Returns bytes written on success, negative error code on failure.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn kvpack_escape(
    input_ptr: *const u8,
    input_len: usize,
    buf_ptr: *mut u8,
    buf_len: usize,
) -> i32 {
    let Some(input) = (unsafe { str_from_raw(input_ptr, input_len) }) else {
        return KVPACK_ERR_INVALID_INPUT;
    };
    let buf = unsafe { buf_from_raw(buf_ptr, buf_len) };
    copy_out(&kvpack_codec::escape(input), buf)
}

/// Unescape a single key or value.
///
/// # Safety
/// - `input_ptr` must point to `input_len` readable bytes.
/// - `buf_ptr` must point to a writeable buffer of at least `buf_len` bytes.
///
/// Returns bytes written on success, negative error code on failure.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn kvpack_unescape(
    input_ptr: *const u8,
    input_len: usize,
    buf_ptr: *mut u8,
    buf_len: usize,
) -> i32 {
    let Some(input) = (unsafe { str_from_raw(input_ptr, input_len) }) else {
        return KVPACK_ERR_INVALID_INPUT;
    };
    let buf = unsafe { buf_from_raw(buf_ptr, buf_len) };
    copy_out(&kvpack_codec::unescape(input), buf)
}

/// Static, null-terminated description of a result code.
#[unsafe(no_mangle)]
pub extern "C" fn kvpack_strerror(code: i32) -> *const c_char {
    let msg = match code {
        KVPACK_ERR_INVALID_INPUT => c"invalid input",
        KVPACK_ERR_MALFORMED_DOCUMENT => c"malformed document",
        KVPACK_ERR_BUFFER_TOO_SMALL => c"output buffer too small",
        KVPACK_ERR_TOO_MANY_PAIRS => c"too many pairs",
        n if n >= 0 => c"ok",
        _ => c"unknown error",
    };
    msg.as_ptr()
}

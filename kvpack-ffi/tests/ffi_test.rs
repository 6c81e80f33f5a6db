//! FFI integration tests.
//!
//! Tests the C FFI functions by calling them from Rust.
//! No C compiler needed — same-binary calls.

use std::ffi::CStr;

use kvpack_ffi::*;

fn str_value(s: &str) -> KvpackValue {
    KvpackValue {
        tag: KvpackValueTag::Str,
        str_val: KvpackStr {
            ptr: s.as_ptr(),
            len: s.len(),
        },
        int_val: 0,
        float_val: 0.0,
    }
}

fn tagged(tag: KvpackValueTag, int_val: i64) -> KvpackValue {
    KvpackValue {
        tag,
        str_val: KvpackStr {
            ptr: std::ptr::null(),
            len: 0,
        },
        int_val,
        float_val: 0.0,
    }
}

/// Helper: encode via FFI, returning the result code and output text.
fn ffi_encode(entries: &[KvpackEntry], buf_len: usize) -> (i32, String) {
    let mut buf = vec![0u8; buf_len];
    let rc = unsafe { kvpack_encode(entries.as_ptr(), entries.len(), buf.as_mut_ptr(), buf.len()) };
    let text = if rc > 0 {
        String::from_utf8(buf[..rc as usize].to_vec()).unwrap()
    } else {
        String::new()
    };
    (rc, text)
}

/// Helper: decode via FFI, returning the result code and owned pairs.
fn ffi_decode(input: &str, max_pairs: usize, scratch_len: usize) -> (i32, Vec<(String, String)>) {
    let empty = KvpackPair {
        key: KvpackStr {
            ptr: std::ptr::null(),
            len: 0,
        },
        value: KvpackStr {
            ptr: std::ptr::null(),
            len: 0,
        },
    };
    let mut pairs = vec![empty; max_pairs];
    let mut scratch = vec![0u8; scratch_len];
    let rc = unsafe {
        kvpack_decode(
            input.as_ptr(),
            input.len(),
            pairs.as_mut_ptr(),
            pairs.len(),
            scratch.as_mut_ptr(),
            scratch.len(),
        )
    };
    let mut out = Vec::new();
    if rc > 0 {
        for pair in &pairs[..rc as usize] {
            out.push((unsafe { owned(&pair.key) }, unsafe { owned(&pair.value) }));
        }
    }
    (rc, out)
}

/// Helper: copy a `KvpackStr` into an owned `String`.
unsafe fn owned(s: &KvpackStr) -> String {
    if s.ptr.is_null() || s.len == 0 {
        String::new()
    } else {
        let bytes = unsafe { std::slice::from_raw_parts(s.ptr, s.len) };
        std::str::from_utf8(bytes).unwrap().to_string()
    }
}

// =========================================================================
// Encode
// =========================================================================

#[test]
fn ffi_encode_simple() {
    let entries = [
        KvpackEntry {
            key: str_value("a"),
            value: str_value("1"),
        },
        KvpackEntry {
            key: str_value("b"),
            value: tagged(KvpackValueTag::Int, 2),
        },
    ];
    let (rc, text) = ffi_encode(&entries, 64);
    assert_eq!(rc, 7);
    assert_eq!(text, "a=1,b=2");
}

#[test]
fn ffi_encode_escapes() {
    let entries = [KvpackEntry {
        key: str_value("a,b"),
        value: str_value("c=d"),
    }];
    let (rc, text) = ffi_encode(&entries, 64);
    assert!(rc > 0);
    assert_eq!(text, r"a\,b=c\=d");
}

#[test]
fn ffi_encode_empty() {
    let rc = unsafe { kvpack_encode(std::ptr::null(), 0, std::ptr::null_mut(), 0) };
    assert_eq!(rc, KVPACK_OK);
}

#[test]
fn ffi_encode_rejects_non_scalar() {
    for tag in [KvpackValueTag::Float, KvpackValueTag::Bool, KvpackValueTag::Null] {
        let entries = [KvpackEntry {
            key: str_value("k"),
            value: tagged(tag, 1),
        }];
        let (rc, _) = ffi_encode(&entries, 64);
        assert_eq!(rc, KVPACK_ERR_INVALID_INPUT, "accepted {tag:?}");
    }
}

#[test]
fn ffi_encode_rejects_invalid_utf8() {
    let bad = [0xffu8, 0xfe];
    let mut key = str_value("");
    key.str_val = KvpackStr {
        ptr: bad.as_ptr(),
        len: bad.len(),
    };
    let entries = [KvpackEntry {
        key,
        value: str_value("v"),
    }];
    let (rc, _) = ffi_encode(&entries, 64);
    assert_eq!(rc, KVPACK_ERR_INVALID_INPUT);
}

#[test]
fn ffi_encode_buffer_too_small() {
    let entries = [KvpackEntry {
        key: str_value("key"),
        value: str_value("value"),
    }];
    let (rc, _) = ffi_encode(&entries, 4);
    assert_eq!(rc, KVPACK_ERR_BUFFER_TOO_SMALL);
}

// =========================================================================
// Decode
// =========================================================================

#[test]
fn ffi_decode_simple() {
    let (rc, pairs) = ffi_decode("a=1,b=2", 8, 64);
    assert_eq!(rc, 2);
    assert_eq!(
        pairs,
        vec![("a".to_string(), "1".to_string()), ("b".to_string(), "2".to_string())]
    );
}

#[test]
fn ffi_decode_unescapes_into_scratch() {
    let (rc, pairs) = ffi_decode(r"a\,b=c\=d,\\=", 4, 64);
    assert_eq!(rc, 2);
    assert_eq!(pairs[0], ("a,b".to_string(), "c=d".to_string()));
    assert_eq!(pairs[1], (r"\".to_string(), String::new()));
}

#[test]
fn ffi_decode_empty_document() {
    let (rc, pairs) = ffi_decode("", 0, 0);
    assert_eq!(rc, KVPACK_OK);
    assert!(pairs.is_empty());
}

#[test]
fn ffi_decode_collapses_duplicates() {
    let (rc, pairs) = ffi_decode("a=1,b=2,a=3", 2, 64);
    assert_eq!(rc, 2);
    assert_eq!(pairs[0], ("a".to_string(), "3".to_string()));
}

#[test]
fn ffi_decode_malformed() {
    let (rc, _) = ffi_decode("a=b=c", 4, 64);
    assert_eq!(rc, KVPACK_ERR_MALFORMED_DOCUMENT);
    let (rc, _) = ffi_decode("noequals", 4, 64);
    assert_eq!(rc, KVPACK_ERR_MALFORMED_DOCUMENT);
}

#[test]
fn ffi_decode_too_many_pairs() {
    let (rc, _) = ffi_decode("a=1,b=2,c=3", 2, 64);
    assert_eq!(rc, KVPACK_ERR_TOO_MANY_PAIRS);
}

#[test]
fn ffi_decode_scratch_too_small() {
    let (rc, _) = ffi_decode("key=value", 1, 4);
    assert_eq!(rc, KVPACK_ERR_BUFFER_TOO_SMALL);
}

// =========================================================================
// Escape / unescape / strerror
// =========================================================================

#[test]
fn ffi_escape_and_unescape() {
    let input = r"a\b,c=d";
    let mut buf = [0u8; 32];
    let n = unsafe { kvpack_escape(input.as_ptr(), input.len(), buf.as_mut_ptr(), buf.len()) };
    assert!(n > 0);
    let escaped = std::str::from_utf8(&buf[..n as usize]).unwrap().to_string();
    assert_eq!(escaped, r"a\\b\,c\=d");

    let mut back = [0u8; 32];
    let m = unsafe {
        kvpack_unescape(escaped.as_ptr(), escaped.len(), back.as_mut_ptr(), back.len())
    };
    assert_eq!(std::str::from_utf8(&back[..m as usize]).unwrap(), input);
}

#[test]
fn ffi_strerror_messages() {
    let msg = |code| unsafe { CStr::from_ptr(kvpack_strerror(code)) }.to_str().unwrap();
    assert_eq!(msg(KVPACK_OK), "ok");
    assert_eq!(msg(12), "ok");
    assert_eq!(msg(KVPACK_ERR_INVALID_INPUT), "invalid input");
    assert_eq!(msg(KVPACK_ERR_MALFORMED_DOCUMENT), "malformed document");
    assert_eq!(msg(KVPACK_ERR_BUFFER_TOO_SMALL), "output buffer too small");
    assert_eq!(msg(KVPACK_ERR_TOO_MANY_PAIRS), "too many pairs");
    assert_eq!(msg(-99), "unknown error");
}

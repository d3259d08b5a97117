//! C-FFI layer for numnorm - used by Go (cgo) and other FFI consumers.
//!
//! ZERO logic here. All calls delegate to `numnorm-core`.
//!
//! # Memory Contract
//!
//! All functions that return `*mut c_char` allocate via `CString`.
//! The caller MUST free the returned string by calling `numnorm_free_string()`.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Integer result from `numnorm_normalize`.
///
/// - `error` non-null: the input was unusable; `error` holds the message.
/// - `present` false: the input matched no recognized format.
/// - `present` true: `value` holds the normalized integer.
///
/// The caller MUST free `error` with `numnorm_free_string()` when non-null.
#[repr(C)]
pub struct NumnormInteger {
    pub value: i64,
    pub present: bool,
    pub error: *mut c_char,
}

impl NumnormInteger {
    fn from_value(value: Option<i64>) -> Self {
        NumnormInteger {
            value: value.unwrap_or(0),
            present: value.is_some(),
            error: std::ptr::null_mut(),
        }
    }

    fn err(msg: String) -> Self {
        NumnormInteger {
            value: 0,
            present: false,
            error: into_c_string(msg, "unknown error"),
        }
    }
}

/// String result from a numnorm FFI call.
/// If `error` is null, the call succeeded and `result` contains the output.
/// If `error` is non-null, the call failed and `error` contains the error message.
/// The caller MUST free both `result` and `error` with `numnorm_free_string()`.
#[repr(C)]
pub struct NumnormResult {
    pub result: *mut c_char,
    pub error: *mut c_char,
}

impl NumnormResult {
    fn ok(value: String) -> Self {
        NumnormResult {
            result: into_c_string(value, ""),
            error: std::ptr::null_mut(),
        }
    }

    fn err(msg: String) -> Self {
        NumnormResult {
            result: std::ptr::null_mut(),
            error: into_c_string(msg, "unknown error"),
        }
    }
}

fn into_c_string(value: String, fallback: &str) -> *mut c_char {
    CString::new(value)
        .or_else(|_| CString::new(fallback))
        .map(CString::into_raw)
        .unwrap_or(std::ptr::null_mut())
}

/// Helper: convert a C string pointer to a Rust &str.
/// Returns None if the pointer is null or not valid UTF-8.
unsafe fn cstr_to_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

/// Normalize a numeral in any supported regional format to an integer.
///
/// # Safety
/// `text` must be a valid null-terminated UTF-8 C string.
/// The caller must free a non-null `error` with `numnorm_free_string()`.
#[no_mangle]
pub unsafe extern "C" fn numnorm_normalize(text: *const c_char) -> NumnormInteger {
    let text = match cstr_to_str(text) {
        Some(s) => s,
        None => return NumnormInteger::err("null or invalid UTF-8 input".into()),
    };

    NumnormInteger::from_value(numnorm_core::normalize(text))
}

/// Explain how a value is sanitized, recognized and rounded.
/// Returns JSON: { "input": ..., "sanitized": ..., "rule": ..., "value": ... }
///
/// # Safety
/// `text` must be a valid null-terminated UTF-8 C string.
/// The caller must free the returned strings with `numnorm_free_string()`.
#[no_mangle]
pub unsafe extern "C" fn numnorm_explain(text: *const c_char) -> NumnormResult {
    let text = match cstr_to_str(text) {
        Some(s) => s,
        None => return NumnormResult::err("null or invalid UTF-8 input".into()),
    };

    let report = numnorm_core::explain(text);
    match serde_json::to_string_pretty(&report) {
        Ok(json) => NumnormResult::ok(json),
        Err(e) => NumnormResult::err(format!("Serialization error: {}", e)),
    }
}

/// Free a string previously returned by a numnorm FFI function.
///
/// # Safety
/// `ptr` must be a pointer previously returned by a numnorm FFI function,
/// or null (in which case this is a no-op).
#[no_mangle]
pub unsafe extern "C" fn numnorm_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

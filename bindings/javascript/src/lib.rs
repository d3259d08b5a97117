//! JavaScript/TypeScript bindings for numnorm
//!
//! Thin wrapper around `numnorm-core` compiled to WebAssembly.
//! ZERO logic here - all behavior from the canonical Rust implementation.

use wasm_bindgen::prelude::*;

/// Normalize a numeral in any supported regional format to an integer.
///
/// @param text - the raw value, e.g. "1.000.000,12"
/// @returns BigInt, or null when the value matches no recognized format
#[wasm_bindgen(js_name = "normalizeInteger")]
pub fn normalize_integer(text: &str) -> JsValue {
    match numnorm_core::normalize(text) {
        Some(value) => JsValue::from(value),
        None => JsValue::NULL,
    }
}

/// Explain how a value is sanitized, recognized and rounded.
///
/// @param text - the raw value
/// @returns JSON string: { input, sanitized, rule, value }
/// @throws Error if the report cannot be serialized
#[wasm_bindgen]
pub fn explain(text: &str) -> Result<String, JsError> {
    let report = numnorm_core::explain(text);
    serde_json::to_string_pretty(&report)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

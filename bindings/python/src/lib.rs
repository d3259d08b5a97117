//! Python bindings for numnorm
//!
//! Thin wrapper around `numnorm-core` - ZERO logic here.
//! All behavior comes from the canonical Rust implementation.

use numnorm_core::RawInput;
use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyFloat, PyInt, PyString};

/// Convert a Python value to its canonical string form.
///
/// `bool` is rejected even though it subclasses `int`.
fn raw_input(value: &Bound<'_, PyAny>) -> PyResult<RawInput<'static>> {
    if value.is_instance_of::<PyBool>() {
        return Err(PyTypeError::new_err(
            "expected str, int or float, found bool",
        ));
    }
    if let Ok(s) = value.downcast::<PyString>() {
        return Ok(RawInput::from(s.to_cow()?.into_owned()));
    }
    if value.is_instance_of::<PyInt>() {
        // str() keeps arbitrary-precision ints intact
        return Ok(RawInput::from(value.str()?.to_cow()?.into_owned()));
    }
    if let Ok(f) = value.downcast::<PyFloat>() {
        return Ok(RawInput::from(f.value()));
    }
    Err(PyTypeError::new_err(format!(
        "expected str, int or float, found {}",
        value.get_type().name()?
    )))
}

/// Normalize a number in any supported regional format to an int.
///
/// Examples:
///     normalize_integer("1.000.000,12") == 1000000
///     normalize_integer("1,000,000.12") == 1000000
///     normalize_integer("1000031.69") == 1000032
///
/// Args:
///     value: str, int or float
///
/// Returns:
///     int, or None when the value matches no recognized format
///
/// Raises:
///     TypeError: If value is not a str, int or float
#[pyfunction]
fn normalize_integer(value: &Bound<'_, PyAny>) -> PyResult<Option<i64>> {
    let raw = raw_input(value)?;
    Ok(numnorm_core::normalize_value(&raw))
}

/// Explain how a value is sanitized, recognized and rounded.
///
/// Args:
///     text: the raw value
///
/// Returns:
///     JSON string:
///     {
///         "input": str,
///         "sanitized": str,
///         "rule": "plain_integer" | "plain_decimal" | "comma_decimal" | "period_decimal" | null,
///         "value": int | null
///     }
#[pyfunction]
fn explain(text: &str) -> PyResult<String> {
    let report = numnorm_core::explain(text);
    serde_json::to_string_pretty(&report)
        .map_err(|e| PyValueError::new_err(format!("Serialization error: {}", e)))
}

/// numnorm Python module - locale-ambiguous number normalization
#[pymodule]
fn numnorm(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(normalize_integer, m)?)?;
    m.add_function(wrap_pyfunction!(explain, m)?)?;
    Ok(())
}

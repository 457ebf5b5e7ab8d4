//! Lenient extraction of typed values from a JSON config object.
//!
//! Missing keys and values of the wrong JSON type yield `None`, so callers
//! decide the default. Keys present with the right type are returned as-is
//! and validated by the caller.

use serde_json::Value;

/// Reads `params[name]` as an `f64`. Integers are accepted.
pub fn param_f64(params: &Value, name: &str) -> Option<f64> {
    params.get(name).and_then(Value::as_f64)
}

/// Reads `params[name]` as a string slice.
pub fn param_str<'a>(params: &'a Value, name: &str) -> Option<&'a str> {
    params.get(name).and_then(Value::as_str)
}

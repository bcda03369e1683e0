//! Optional-field access over provider JSON.
//!
//! Amadeus responses are deeply nested and inconsistently populated: any
//! field may be missing, null, or of an unexpected type. These accessors
//! make every read explicit about its path and its default, instead of
//! scattering presence checks through the transformation code.

use serde_json::Value;

/// Get the string value at a nested field path, if present and non-null.
///
/// Returns `None` when any path component is missing, null, or when the
/// leaf is not a string.
pub fn text_at<'a>(node: &'a Value, path: &[&str]) -> Option<&'a str> {
    let mut current = node;
    for field in path {
        current = current.get(field)?;
        if current.is_null() {
            return None;
        }
    }
    current.as_str()
}

/// Get the string at a nested field path, falling back to a default.
pub fn text_or<'a>(node: &'a Value, path: &[&str], default: &'a str) -> &'a str {
    text_at(node, path).unwrap_or(default)
}

/// Get the array at a nested field path, if present.
///
/// Returns `None` when any path component is missing or the leaf is not
/// an array. An empty array is returned as `Some(&[])`, not `None`:
/// callers that care about emptiness check it themselves.
pub fn array_at<'a>(node: &'a Value, path: &[&str]) -> Option<&'a [Value]> {
    let mut current = node;
    for field in path {
        current = current.get(field)?;
    }
    current.as_array().map(|v| v.as_slice())
}

/// Get a boolean field, falling back to a default when the field is
/// missing or not boolean-typed.
pub fn bool_or(node: &Value, field: &str, default: bool) -> bool {
    node.get(field).and_then(Value::as_bool).unwrap_or(default)
}

/// Get a number field as f64, accepting both JSON numbers and numeric
/// strings (the provider mixes the two in price structures).
pub fn number_at(node: &Value, path: &[&str]) -> Option<f64> {
    let mut current = node;
    for field in path {
        current = current.get(field)?;
    }
    match current {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

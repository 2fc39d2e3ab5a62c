// Chunk: docs/chunks/settings_resolver - Leaf value parsing

//! Total parsers for setting values.
//!
//! Each parser returns `None` when the JSON value has the wrong shape; the
//! caller substitutes the setting's built-in default. Nothing here fails.

use serde_json::Value;

/// A JSON boolean. Strings like `"true"` are rejected.
pub(crate) fn boolean(value: &Value) -> Option<bool> {
    value.as_bool()
}

/// A non-negative JSON integer.
pub(crate) fn count(value: &Value) -> Option<usize> {
    value.as_u64().and_then(|n| usize::try_from(n).ok())
}

/// Any finite JSON number.
pub(crate) fn number(value: &Value) -> Option<f64> {
    value.as_f64().filter(|n| n.is_finite())
}

/// A JSON string.
pub(crate) fn string(value: &Value) -> Option<String> {
    value.as_str().map(str::to_owned)
}

/// An array of strings. Non-string items are skipped.
pub(crate) fn string_list(value: &Value) -> Option<Vec<String>> {
    let items = value.as_array()?;
    Some(items.iter().filter_map(string).collect())
}

/// An array of non-negative integers. Other items are skipped.
pub(crate) fn count_list(value: &Value) -> Option<Vec<usize>> {
    let items = value.as_array()?;
    Some(items.iter().filter_map(count).collect())
}

/// Short name of a JSON value's kind, for messages.
pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

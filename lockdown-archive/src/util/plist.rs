/*!
 Helpers for reading typed values out of [`plist::Dictionary`] data.

 Keyed archives carry no class information that survives decoding, so every field is
 checked against the shape the decoder expects and any mismatch is reported as a
 [`GraphError`] naming the field.
*/

use plist::{Dictionary, Uid, Value};

use crate::error::graph::GraphError;

/// Marker stored at `$objects[0]` that means "no object"
pub const NULL_SENTINEL: &str = "$null";

/// Determine if a value is the `$null` sentinel
pub fn is_null(value: &Value) -> bool {
    value.as_string() == Some(NULL_SENTINEL)
}

/// Get a short name for the shape of a value, used in error messages
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Array(_) => "array",
        Value::Dictionary(_) => "dictionary",
        Value::Boolean(_) => "bool",
        Value::Data(_) => "data",
        Value::Date(_) => "date",
        Value::Real(_) => "real",
        Value::Integer(_) => "int",
        Value::String(_) => "string",
        Value::Uid(_) => "uid",
        _ => "unknown",
    }
}

/// Build a [`GraphError::InvalidType`] for a value that does not have the expected shape
pub fn invalid_type(field: &str, expected: &str, found: &Value) -> GraphError {
    GraphError::InvalidType(
        field.to_string(),
        expected.to_string(),
        type_name(found).to_string(),
    )
}

/// Get a value from a dictionary, failing if the key is missing
pub fn extract_key<'a>(dict: &'a Dictionary, key: &str) -> Result<&'a Value, GraphError> {
    dict.get(key)
        .ok_or_else(|| GraphError::MissingKey(key.to_string()))
}

/// Extract a dictionary from a dictionary by key
pub fn extract_dictionary<'a>(
    dict: &'a Dictionary,
    key: &str,
) -> Result<&'a Dictionary, GraphError> {
    let value = extract_key(dict, key)?;
    value
        .as_dictionary()
        .ok_or_else(|| invalid_type(key, "dictionary", value))
}

/// Extract an array from a dictionary by key
pub fn extract_array_key<'a>(dict: &'a Dictionary, key: &str) -> Result<&'a [Value], GraphError> {
    let value = extract_key(dict, key)?;
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| invalid_type(key, "array", value))
}

/// Extract raw bytes from a dictionary by key
pub fn extract_bytes_key<'a>(dict: &'a Dictionary, key: &str) -> Result<&'a [u8], GraphError> {
    let value = extract_key(dict, key)?;
    value
        .as_data()
        .ok_or_else(|| invalid_type(key, "data", value))
}

/// Extract a `UID` reference from a dictionary by key
pub fn extract_uid_key(dict: &Dictionary, key: &str) -> Result<Uid, GraphError> {
    match extract_key(dict, key)? {
        Value::Uid(uid) => Ok(*uid),
        other => Err(invalid_type(key, "uid", other)),
    }
}

/// Extract a number of seconds from a dictionary by key.
///
/// `NSDate` stores its time as a real, but whole values may come back as integers.
pub fn extract_seconds_key(dict: &Dictionary, key: &str) -> Result<f64, GraphError> {
    let value = extract_key(dict, key)?;
    match value {
        Value::Real(seconds) => Ok(*seconds),
        Value::Integer(seconds) => seconds
            .as_signed()
            .map(|seconds| seconds as f64)
            .ok_or_else(|| invalid_type(key, "real", value)),
        other => Err(invalid_type(key, "real", other)),
    }
}

/// Read a value as a bool
pub fn as_bool(value: &Value, field: &str) -> Result<bool, GraphError> {
    value
        .as_boolean()
        .ok_or_else(|| invalid_type(field, "bool", value))
}

/// Read a value as a string
pub fn as_str<'a>(value: &'a Value, field: &str) -> Result<&'a str, GraphError> {
    value
        .as_string()
        .ok_or_else(|| invalid_type(field, "string", value))
}

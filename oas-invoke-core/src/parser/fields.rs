use serde_json::{Map, Value};

use crate::error::ParseError;

pub(crate) fn pointer_token(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}

pub(crate) fn child_ptr(parent_ptr: &str, key: &str) -> String {
    format!("{parent_ptr}/{}", pointer_token(key))
}

/// Strings are taken as-is; numbers are accepted too since YAML authors write `version: 1.0`.
fn scalar_string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub(crate) fn required_str(
    obj: &Map<String, Value>,
    key: &str,
    parent_ptr: &str,
) -> Result<String, ParseError> {
    let v = obj
        .get(key)
        .ok_or_else(|| ParseError::missing(child_ptr(parent_ptr, key)))?;
    scalar_string(v).ok_or_else(|| ParseError::invalid(child_ptr(parent_ptr, key), "a string"))
}

pub(crate) fn optional_str(
    obj: &Map<String, Value>,
    key: &str,
    parent_ptr: &str,
) -> Result<Option<String>, ParseError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => scalar_string(v)
            .map(Some)
            .ok_or_else(|| ParseError::invalid(child_ptr(parent_ptr, key), "a string")),
    }
}

pub(crate) fn optional_bool(
    obj: &Map<String, Value>,
    key: &str,
    parent_ptr: &str,
) -> Result<bool, ParseError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(ParseError::invalid(child_ptr(parent_ptr, key), "a boolean")),
    }
}

pub(crate) fn object_at<'a>(
    v: &'a Value,
    ptr: &str,
) -> Result<&'a Map<String, Value>, ParseError> {
    v.as_object()
        .ok_or_else(|| ParseError::invalid(ptr.to_string(), "an object"))
}

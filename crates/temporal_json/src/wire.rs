//! Wire values - the JSON scalars temporal values are encoded to

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::{CodecError, MapperError};

/// A JSON scalar carrying an encoded temporal value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireValue {
    /// A JSON integer
    Integer(i64),
    /// A JSON string
    Text(String),
}

impl WireValue {
    pub fn text(value: impl Into<String>) -> Self {
        WireValue::Text(value.into())
    }

    /// Returns true for the empty string
    pub fn is_empty_text(&self) -> bool {
        matches!(self, WireValue::Text(text) if text.is_empty())
    }

    /// Borrows the string, or fails with a malformed-value error
    pub fn as_text(&self, type_name: &'static str) -> Result<&str, CodecError> {
        match self {
            WireValue::Text(text) => Ok(text),
            WireValue::Integer(_) => Err(CodecError::malformed(type_name, self, "expected a string")),
        }
    }

    /// Returns the integer, or fails with a malformed-value error
    pub fn as_integer(&self, type_name: &'static str) -> Result<i64, CodecError> {
        match self {
            WireValue::Integer(number) => Ok(*number),
            WireValue::Text(_) => Err(CodecError::malformed(type_name, self, "expected an integer")),
        }
    }

    /// Reads a wire value out of a JSON document node
    pub fn from_json(value: &Value, type_name: &'static str) -> Result<Self, MapperError> {
        match value {
            Value::String(text) => Ok(WireValue::Text(text.clone())),
            Value::Number(number) => match number.as_i64() {
                Some(integer) => Ok(WireValue::Integer(integer)),
                None if number.is_u64() => Err(MapperError::UnexpectedType {
                    type_name,
                    found: "integer out of range",
                }),
                None => Err(MapperError::UnexpectedType {
                    type_name,
                    found: "fractional number",
                }),
            },
            other => Err(MapperError::UnexpectedType {
                type_name,
                found: json_kind(other),
            }),
        }
    }
}

impl fmt::Display for WireValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireValue::Integer(number) => write!(f, "{}", number),
            WireValue::Text(text) => write!(f, "{:?}", text),
        }
    }
}

impl From<WireValue> for Value {
    fn from(wire: WireValue) -> Self {
        match wire {
            WireValue::Integer(number) => Value::from(number),
            WireValue::Text(text) => Value::String(text),
        }
    }
}

/// Names the kind of a JSON node for error messages
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

//! Errors raised while decoding records into shapes

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Why a field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationReason {
    /// Required key absent from the record
    Missing,
    /// Key present, value is not text
    WrongType,
}

impl ValidationReason {
    /// Stable reason code, as it appears on the wire
    pub fn code(&self) -> &'static str {
        match self {
            ValidationReason::Missing => "missing",
            ValidationReason::WrongType => "wrong_type",
        }
    }

    /// Human-readable explanation
    pub fn describe(&self) -> &'static str {
        match self {
            ValidationReason::Missing => "missing",
            ValidationReason::WrongType => "not text-coercible",
        }
    }
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single field failed to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, thiserror::Error)]
#[error("field '{field}' is {}", .reason.describe())]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: ValidationReason,
}

impl ValidationError {
    pub fn missing(field: &'static str) -> Self {
        Self {
            field,
            reason: ValidationReason::Missing,
        }
    }

    pub fn wrong_type(field: &'static str) -> Self {
        Self {
            field,
            reason: ValidationReason::WrongType,
        }
    }
}

/// Failure to decode an arbitrary JSON value into a shape
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// JSON type name of a value, for error messages
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

//! Message shapes
//!
//! A shape is an immutable value type whose fields are checked explicitly on
//! decode. Every shape converts to and from a [`Record`], a JSON object that
//! the transport layer serializes.
//!
//! ```text
//! bytes ──▶ Value ──decode_value──▶ Shape ──encode──▶ Record ──▶ bytes
//! ```
//!
//! Decoding never coerces: only JSON strings count as text.

pub mod echo;
pub mod errors;
pub mod ping;
pub mod schema;

use serde_json::{Map, Value};

pub use echo::{EchoRequest, EchoResponse};
pub use ping::PingResponse;
pub use errors::{json_type_name, DecodeError, ValidationError, ValidationReason};
pub use schema::{catalog, shape_schema};

/// Structured, self-describing record a shape decodes from and encodes to
pub type Record = Map<String, Value>;

/// Explicit decode/encode contract shared by all shapes
pub trait Shape: Sized {
    /// Shape name used in logs and the schema catalog
    const NAME: &'static str;

    /// Validate `record` and build the shape. Keys the shape does not know
    /// are ignored.
    fn decode(record: &Record) -> Result<Self, ValidationError>;

    /// Record holding exactly the shape's fields
    fn encode(&self) -> Record;

    /// Decode any JSON value; non-objects are rejected before field checks
    fn decode_value(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Object(record) => Ok(Self::decode(record)?),
            other => Err(DecodeError::NotAnObject {
                found: json_type_name(other),
            }),
        }
    }

    fn to_value(&self) -> Value {
        Value::Object(self.encode())
    }
}

/// Read a required text field
pub fn require_text(record: &Record, field: &'static str) -> Result<String, ValidationError> {
    match record.get(field) {
        None => Err(ValidationError::missing(field)),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(ValidationError::wrong_type(field)),
    }
}

/// Single-field record
pub fn text_record(field: &'static str, text: &str) -> Record {
    let mut record = Record::new();
    record.insert(field.to_string(), Value::String(text.to_string()));
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("test record must be an object"),
        }
    }

    #[test]
    fn test_require_text_present() {
        let r = record(json!({"text": "hi"}));
        assert_eq!(require_text(&r, "text"), Ok("hi".to_string()));
    }

    #[test]
    fn test_require_text_missing() {
        let r = record(json!({"other": "hi"}));
        assert_eq!(require_text(&r, "text"), Err(ValidationError::missing("text")));
    }

    #[test]
    fn test_require_text_rejects_every_non_string() {
        for value in [json!(null), json!(true), json!(7), json!(1.5), json!([]), json!({})] {
            let r = record(json!({ "text": value }));
            assert_eq!(
                require_text(&r, "text"),
                Err(ValidationError::wrong_type("text")),
                "value {} should be rejected",
                r["text"]
            );
        }
    }

    #[test]
    fn test_decode_value_rejects_non_objects() {
        let err = EchoRequest::decode_value(&json!(["hello"])).unwrap_err();
        assert_eq!(err, DecodeError::NotAnObject { found: "array" });

        let err = PingResponse::decode_value(&json!("pong")).unwrap_err();
        assert_eq!(err, DecodeError::NotAnObject { found: "string" });
    }

    #[test]
    fn test_decode_value_surfaces_validation_errors() {
        let err = EchoRequest::decode_value(&json!({})).unwrap_err();
        assert_eq!(err, DecodeError::Invalid(ValidationError::missing("text")));
    }

    #[test]
    fn test_activations_use_the_same_shape_types() {
        let request: crate::activations::echo::EchoRequest = EchoRequest::new("x");
        let ping: crate::activations::health::PingResponse = PingResponse::new("pong");
        assert_eq!(request.text(), "x");
        assert_eq!(ping.message(), "pong");
    }

    #[test]
    fn test_to_value_wraps_encoded_record() {
        assert_eq!(
            EchoResponse::new("hello").to_value(),
            json!({"text": "hello"})
        );
    }
}

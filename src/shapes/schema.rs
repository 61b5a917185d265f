//! JSON Schema catalog for the shapes
//!
//! Schemas are generated by schemars from the shape definitions and their doc
//! comments. They document the wire format only; decoding goes through
//! [`Shape::decode`](super::Shape::decode).

use schemars::JsonSchema;
use serde_json::{Map, Value};

use super::{EchoRequest, EchoResponse, PingResponse, Shape};

/// JSON Schema for a single shape
pub fn shape_schema<T: Shape + JsonSchema>() -> Value {
    schemars::schema_for!(T).to_value()
}

/// Schemas of every shape, keyed by shape name
pub fn catalog() -> Value {
    let mut shapes = Map::new();
    shapes.insert(PingResponse::NAME.to_string(), shape_schema::<PingResponse>());
    shapes.insert(EchoRequest::NAME.to_string(), shape_schema::<EchoRequest>());
    shapes.insert(EchoResponse::NAME.to_string(), shape_schema::<EchoResponse>());
    Value::Object(shapes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required(schema: &Value) -> Vec<&str> {
        schema
            .get("required")
            .and_then(|v| v.as_array())
            .map(|fields| fields.iter().filter_map(|f| f.as_str()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_catalog_lists_every_shape() {
        let catalog = catalog();
        let names: Vec<&String> = catalog.as_object().unwrap().keys().collect();
        assert_eq!(names.len(), 3);
        assert!(catalog.get("PingResponse").is_some());
        assert!(catalog.get("EchoRequest").is_some());
        assert!(catalog.get("EchoResponse").is_some());
    }

    #[test]
    fn test_ping_schema_requires_message_string() {
        let schema = shape_schema::<PingResponse>();
        assert_eq!(required(&schema), vec!["message"]);
        assert_eq!(schema["properties"]["message"]["type"], "string");
    }

    #[test]
    fn test_echo_schemas_require_text_string() {
        for schema in [shape_schema::<EchoRequest>(), shape_schema::<EchoResponse>()] {
            assert_eq!(required(&schema), vec!["text"]);
            assert_eq!(schema["properties"]["text"]["type"], "string");
        }
    }

    #[test]
    fn test_schema_carries_doc_descriptions() {
        let schema = shape_schema::<EchoRequest>();
        let description = schema["properties"]["text"]["description"].as_str();
        assert!(description.is_some(), "field docs should become descriptions");
    }
}

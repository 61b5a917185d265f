//! Echo request and response shapes
//!
//! Both carry a single `text` field. Any string is valid, including the
//! empty string.

use schemars::JsonSchema;

use super::{require_text, text_record, Record, Shape, ValidationError};

const TEXT_FIELD: &str = "text";

/// Body of an echo request
#[derive(Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
pub struct EchoRequest {
    /// Text to echo back
    text: String,
}

/// Body of an echo response
#[derive(Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
pub struct EchoResponse {
    /// The echoed text
    text: String,
}

impl EchoRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl EchoResponse {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl From<EchoRequest> for EchoResponse {
    fn from(request: EchoRequest) -> Self {
        Self { text: request.text }
    }
}

impl Shape for EchoRequest {
    const NAME: &'static str = "EchoRequest";

    fn decode(record: &Record) -> Result<Self, ValidationError> {
        Ok(Self {
            text: require_text(record, TEXT_FIELD)?,
        })
    }

    fn encode(&self) -> Record {
        text_record(TEXT_FIELD, &self.text)
    }
}

impl Shape for EchoResponse {
    const NAME: &'static str = "EchoResponse";

    fn decode(record: &Record) -> Result<Self, ValidationError> {
        Ok(Self {
            text: require_text(record, TEXT_FIELD)?,
        })
    }

    fn encode(&self) -> Record {
        text_record(TEXT_FIELD, &self.text)
    }
}

//! Liveness check reply

use schemars::JsonSchema;

use super::{require_text, text_record, Record, Shape, ValidationError};

/// Reply to a liveness check
#[derive(Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
pub struct PingResponse {
    /// Liveness message, `pong` unless configured otherwise
    message: String,
}

impl PingResponse {
    pub const MESSAGE_FIELD: &'static str = "message";

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}

impl Shape for PingResponse {
    const NAME: &'static str = "PingResponse";

    fn decode(record: &Record) -> Result<Self, ValidationError> {
        Ok(Self {
            message: require_text(record, Self::MESSAGE_FIELD)?,
        })
    }

    fn encode(&self) -> Record {
        text_record(Self::MESSAGE_FIELD, &self.message)
    }
}

use crate::shapes::PingResponse;

/// Health activation - answers liveness checks
///
/// Holds the message every ping replies with. Cloned into each request via
/// router state, so the message is shared read-only.
#[derive(Debug, Clone)]
pub struct Health {
    message: String,
}

impl Health {
    /// Namespace for the health routes
    pub const NAMESPACE: &'static str = "health";
    /// Message used when none is configured
    pub const DEFAULT_MESSAGE: &'static str = "pong";

    pub fn new() -> Self {
        Self::with_message(Self::DEFAULT_MESSAGE)
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the reply for a liveness check
    pub fn ping(&self) -> PingResponse {
        tracing::trace!(namespace = Self::NAMESPACE, "Ping");
        PingResponse::new(self.message.clone())
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::new()
    }
}

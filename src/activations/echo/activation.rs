//! Echo activation - returns the request text unchanged

use crate::shapes::{EchoRequest, EchoResponse};

/// Echo activation - echoes text back
#[derive(Debug, Clone, Copy)]
pub struct Echo;

impl Echo {
    /// Namespace for the echo routes
    pub const NAMESPACE: &'static str = "echo";

    pub fn new() -> Self {
        Echo
    }

    /// Echo the request text back
    pub fn echo(&self, request: EchoRequest) -> EchoResponse {
        tracing::debug!(
            namespace = Self::NAMESPACE,
            len = request.text().len(),
            "Echoing text"
        );
        EchoResponse::from(request)
    }
}

impl Default for Echo {
    fn default() -> Self {
        Self::new()
    }
}

//! Router builder - constructs a fully configured service
//!
//! This module is used by both the main binary and the integration tests.

use axum::Router;

use crate::activations::echo::Echo;
use crate::activations::health::Health;
use crate::config::ServerConfig;
use crate::transport::{router, AppState};

/// Build the router with every activation wired to its routes
pub fn build_router(config: &ServerConfig) -> Router {
    let state = AppState {
        health: Health::with_message(config.ping_message.clone()),
        echo: Echo::new(),
    };
    router(state)
}

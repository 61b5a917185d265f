//! HTTP transport
//!
//! The transport owns status codes, headers and framing. It reaches the
//! shapes only through [`ShapeJson`], which calls their explicit
//! decode/encode operations.
//!
//! ## Modules
//!
//! - [`adapter`] - `ShapeJson` extractor/response and `RejectionError`
//! - [`routes`] - router and handlers for `/ping`, `/echo`, `/schema`

pub mod adapter;
pub mod routes;

pub use adapter::{RejectionError, ShapeJson};
pub use routes::{router, AppState};

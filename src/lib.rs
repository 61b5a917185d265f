pub mod activations;
pub mod builder;
pub mod config;
pub mod shapes;
pub mod transport;

// Re-export commonly used items
pub use builder::build_router;
pub use config::{Args, ConfigError, ServerConfig};
pub use shapes::{
    DecodeError, EchoRequest, EchoResponse, PingResponse, Record, Shape, ValidationError,
    ValidationReason,
};
pub use transport::{RejectionError, ShapeJson};

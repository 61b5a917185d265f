mod activation;

pub use activation::Health;
pub use crate::shapes::PingResponse;

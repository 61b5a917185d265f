mod activation;

pub use activation::Echo;
pub use crate::shapes::{EchoRequest, EchoResponse};

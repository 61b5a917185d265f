// Health answers liveness checks with a PingResponse
pub mod health;

// Echo returns the text of an EchoRequest as an EchoResponse
pub mod echo;

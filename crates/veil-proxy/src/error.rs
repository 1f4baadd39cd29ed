//! Proxy error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("Failed to decode routed path: {0}")]
    Decode(String),
}

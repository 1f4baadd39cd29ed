//! Veil Proxy Contract
//!
//! The URL-rewriting proxy is an external service; all this crate knows
//! about it is the configuration contract: a routed-path prefix plus an
//! encode/decode pair. `ProxyConfig::to_routed` builds the path a surface
//! actually loads, `ProxyConfig::from_routed` recovers the original URL
//! for display.
//!
//! The failure policy is asymmetric on purpose: encoding feeds navigation
//! and must fail loudly, decoding feeds the address bar and degrades to
//! the raw routed string instead of erroring.

mod codec;
mod config;
mod error;

pub use codec::{Base64Codec, UrlCodec};
pub use config::ProxyConfig;
pub use error::ProxyError;

pub type Result<T> = std::result::Result<T, ProxyError>;

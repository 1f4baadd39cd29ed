//! URL codecs
//!
//! A codec turns a canonical URL into the opaque token the proxy routes
//! on, and back. The proxy service supplies the real pair; `Base64Codec`
//! matches the stock configuration and keeps tests honest.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::ProxyError;
use crate::Result;

pub trait UrlCodec: Send + Sync {
    fn encode(&self, url: &str) -> String;
    fn decode(&self, encoded: &str) -> Result<String>;
}

/// Standard-alphabet base64 codec.
#[derive(Debug, Default, Clone, Copy)]
pub struct Base64Codec;

impl UrlCodec for Base64Codec {
    fn encode(&self, url: &str) -> String {
        STANDARD.encode(url.as_bytes())
    }

    fn decode(&self, encoded: &str) -> Result<String> {
        let bytes = STANDARD
            .decode(encoded)
            .map_err(|e| ProxyError::Decode(e.to_string()))?;

        String::from_utf8(bytes).map_err(|e| ProxyError::Decode(e.to_string()))
    }
}

//! Proxy configuration

use std::fmt;
use std::sync::Arc;

use url::Url;

use crate::codec::{Base64Codec, UrlCodec};

/// The externally supplied proxy contract: routed paths are
/// `prefix + encode(url)`.
#[derive(Clone)]
pub struct ProxyConfig {
    prefix: String,
    codec: Arc<dyn UrlCodec>,
}

impl ProxyConfig {
    pub fn new(prefix: impl Into<String>, codec: Arc<dyn UrlCodec>) -> Self {
        Self {
            prefix: prefix.into(),
            codec,
        }
    }

    /// Config with the stock base64 codec.
    pub fn base64(prefix: impl Into<String>) -> Self {
        Self::new(prefix, Arc::new(Base64Codec))
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Build the routed path a surface loads for `url`.
    pub fn to_routed(&self, url: &str) -> String {
        format!("{}{}", self.prefix, self.codec.encode(url))
    }

    /// Recover the original URL from a routed path.
    ///
    /// Any failure (missing prefix, codec rejection, decode output that is
    /// not a URL) falls back to returning `routed` verbatim. The address
    /// bar must always have something to show.
    pub fn from_routed(&self, routed: &str) -> String {
        let Some(encoded) = routed.strip_prefix(self.prefix.as_str()) else {
            tracing::debug!(routed = %routed, "Routed path missing prefix, showing verbatim");
            return routed.to_string();
        };

        match self.codec.decode(encoded) {
            Ok(decoded) if Url::parse(&decoded).is_ok() => decoded,
            Ok(_) => {
                tracing::debug!(routed = %routed, "Decoded routed path is not a URL, showing verbatim");
                routed.to_string()
            }
            Err(e) => {
                tracing::debug!(routed = %routed, error = %e, "Routed path failed to decode, showing verbatim");
                routed.to_string()
            }
        }
    }
}

impl fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ProxyConfig {
        ProxyConfig::base64("/veil/service/")
    }

    #[test]
    fn test_routed_roundtrip() {
        let cfg = config();
        let routed = cfg.to_routed("https://wikipedia.org");

        assert!(routed.starts_with("/veil/service/"));
        assert_eq!(cfg.from_routed(&routed), "https://wikipedia.org");
    }

    #[test]
    fn test_from_routed_without_prefix_falls_back() {
        let cfg = config();
        assert_eq!(cfg.from_routed("/other/abc"), "/other/abc");
    }

    #[test]
    fn test_from_routed_with_bad_payload_falls_back() {
        let cfg = config();
        let routed = "/veil/service/%%%not-base64%%%";
        assert_eq!(cfg.from_routed(routed), routed);
    }

    #[test]
    fn test_from_routed_with_non_url_payload_falls_back() {
        let cfg = config();
        // Valid base64, but the decoded text is not a URL
        let routed = cfg.to_routed("just some words");
        assert_eq!(cfg.from_routed(&routed), routed);
    }
}

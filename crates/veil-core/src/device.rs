//! Device class detection
//!
//! Phone and desktop get different chrome; the class is derived from the
//! user-agent string the embedder passes in.

use serde::{Deserialize, Serialize};

const PHONE_MARKERS: [&str; 8] = [
    "mobi",
    "android",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Phone,
    Desktop,
}

impl DeviceClass {
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_lowercase();

        if PHONE_MARKERS.iter().any(|marker| ua.contains(marker)) {
            DeviceClass::Phone
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceClass::Phone => "phone",
            DeviceClass::Desktop => "desktop",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_agents() {
        let ua = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)";
        assert_eq!(DeviceClass::from_user_agent(ua), DeviceClass::Phone);

        let ua = "Mozilla/5.0 (Linux; Android 14; Pixel 8)";
        assert_eq!(DeviceClass::from_user_agent(ua), DeviceClass::Phone);
    }

    #[test]
    fn test_desktop_agents() {
        let ua = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36";
        assert_eq!(DeviceClass::from_user_agent(ua), DeviceClass::Desktop);
        assert_eq!(DeviceClass::from_user_agent(""), DeviceClass::Desktop);
    }
}

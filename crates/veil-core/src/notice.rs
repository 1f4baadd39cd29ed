//! Transient user notices
//!
//! Errors surface as a short-lived banner that clears itself; the notice
//! carries its post time so expiry needs no timer.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub const NOTICE_TTL_SECONDS: i64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
    pub code: Option<String>,
    pub posted_at: DateTime<Utc>,
}

impl Notice {
    pub fn new(message: impl Into<String>, code: Option<String>) -> Self {
        Self {
            message: message.into(),
            code,
            posted_at: Utc::now(),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.posted_at >= Duration::seconds(NOTICE_TTL_SECONDS)
    }
}

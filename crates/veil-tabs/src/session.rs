//! Session data structure
//!
//! One session per tab, one surface per session. The surface is created
//! with the session and dropped with it; nothing else ever holds it.

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::error::TabError;
use crate::surface::Surface;
use crate::Result;

/// Title shown before a hostname is known.
pub const PLACEHOLDER_TITLE: &str = "New Tab";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier, stable for the process lifetime
    pub id: String,
    /// Best-effort hostname of the loaded URL
    pub title: String,
    /// The rendering surface this session owns
    pub surface: Surface,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: PLACEHOLDER_TITLE.to_string(),
            surface: Surface::new(),
        }
    }

    /// The routed path currently assigned to the surface. The surface is
    /// the single source of truth; the session never caches a copy.
    pub fn routed_path(&self) -> Option<&str> {
        self.surface.load_target()
    }

    /// Assign a routed path to the surface and derive the display title
    /// from the canonical URL.
    pub fn navigate(&mut self, url: &str, routed: String) -> Result<()> {
        if url.trim().is_empty() {
            return Err(TabError::InvalidUrl("URL cannot be empty".to_string()));
        }

        self.surface.set_load_target(routed);
        self.title = Url::parse(url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_else(|| PLACEHOLDER_TITLE.to_string());

        tracing::debug!(session_id = %self.id, title = %self.title, "Session navigated");

        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

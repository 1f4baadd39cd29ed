//! Rendering surface
//!
//! Stand-in for the embedded frame a session owns. The surface records
//! what the frame has been told to load (always a routed path) and keeps
//! a linear history for back/forward. `load_generation` increments on
//! every issued load, so a fresh request supersedes any in-flight one
//! without explicit cancellation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Surface {
    id: String,
    history: Vec<String>,
    cursor: usize,
    load_generation: u64,
}

impl Surface {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            history: Vec::new(),
            cursor: 0,
            load_generation: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The routed path the surface is currently loading, if any.
    pub fn load_target(&self) -> Option<&str> {
        self.history.get(self.cursor).map(String::as_str)
    }

    /// Issue a fresh load. Forward history entries are discarded, matching
    /// what an embedded frame does on navigation.
    pub fn set_load_target(&mut self, routed: String) {
        if !self.history.is_empty() {
            self.history.truncate(self.cursor + 1);
        }
        self.history.push(routed);
        self.cursor = self.history.len() - 1;
        self.load_generation += 1;

        tracing::debug!(surface_id = %self.id, depth = self.history.len(), "Surface load issued");
    }

    pub fn history_depth(&self) -> usize {
        self.history.len()
    }

    /// Step back in history. Returns false at the edge.
    pub fn history_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.load_generation += 1;
        true
    }

    /// Step forward in history. Returns false at the edge.
    pub fn history_forward(&mut self) -> bool {
        if self.cursor + 1 >= self.history.len() {
            return false;
        }
        self.cursor += 1;
        self.load_generation += 1;
        true
    }

    /// Re-issue the current load. Returns false when nothing has loaded yet.
    pub fn reload(&mut self) -> bool {
        if self.history.is_empty() {
            return false;
        }
        self.load_generation += 1;
        true
    }

    /// Monotonic count of issued loads; a new value invalidates whatever
    /// load was in flight.
    pub fn load_generation(&self) -> u64 {
        self.load_generation
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}

//! Session registry
//!
//! The ordered set of open tabs. While the registry is non-empty exactly
//! one session is active, and closing never drops the count below one:
//! once a tab strip exists it always has a selectable tab.

use serde::{Deserialize, Serialize};

use crate::session::Session;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SessionRegistry {
    sessions: Vec<Session>,
    active_id: Option<String>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new session at the end of tab order and make it active.
    pub fn create(&mut self) -> &Session {
        let session = Session::new();
        tracing::info!(session_id = %session.id, "Created session");

        self.active_id = Some(session.id.clone());
        self.sessions.push(session);

        // Just pushed, so the last element exists
        &self.sessions[self.sessions.len() - 1]
    }

    /// Make `id` the active session. Unknown ids and the already-active
    /// session are silent no-ops.
    pub fn activate(&mut self, id: &str) {
        if self.active_id.as_deref() == Some(id) {
            return;
        }

        if self.sessions.iter().any(|s| s.id == id) {
            self.active_id = Some(id.to_string());
            tracing::debug!(session_id = %id, "Activated session");
        } else {
            tracing::debug!(session_id = %id, "Ignored activation of unknown session");
        }
    }

    /// Close a session, destroying its surface with it. Closing the last
    /// remaining session (or an unknown id) is a no-op; closing the active
    /// session hands activation to the first remaining session in order.
    pub fn close(&mut self, id: &str) {
        if self.sessions.len() <= 1 {
            tracing::debug!(session_id = %id, "Ignored close of last session");
            return;
        }

        let Some(index) = self.sessions.iter().position(|s| s.id == id) else {
            return;
        };

        let closed = self.sessions.remove(index);
        tracing::info!(session_id = %closed.id, "Closed session");

        if self.active_id.as_deref() == Some(id) {
            self.active_id = self.sessions.first().map(|s| s.id.clone());
        }
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn active_session(&self) -> Option<&Session> {
        let id = self.active_id.as_deref()?;
        self.sessions.iter().find(|s| s.id == id)
    }

    pub fn active_session_mut(&mut self) -> Option<&mut Session> {
        let id = self.active_id.clone()?;
        self.sessions.iter_mut().find(|s| s.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Sessions in tab-strip order.
    pub fn iter(&self) -> impl Iterator<Item = &Session> {
        self.sessions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_marks_active() {
        let mut registry = SessionRegistry::new();
        assert!(registry.active_session().is_none());

        let first = registry.create().id.clone();
        assert_eq!(registry.active_id(), Some(first.as_str()));

        let second = registry.create().id.clone();
        assert_eq!(registry.active_id(), Some(second.as_str()));
        assert_ne!(first, second);
    }

    #[test]
    fn test_created_ids_are_distinct_with_one_active() {
        let mut registry = SessionRegistry::new();
        let ids: Vec<String> = (0..5).map(|_| registry.create().id.clone()).collect();

        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 5);

        let active_count = registry
            .iter()
            .filter(|s| Some(s.id.as_str()) == registry.active_id())
            .count();
        assert_eq!(active_count, 1);
    }

    #[test]
    fn test_activate_unknown_is_noop() {
        let mut registry = SessionRegistry::new();
        let id = registry.create().id.clone();

        registry.activate("no-such-session");
        assert_eq!(registry.active_id(), Some(id.as_str()));
    }

    #[test]
    fn test_activate_switches() {
        let mut registry = SessionRegistry::new();
        let a = registry.create().id.clone();
        let b = registry.create().id.clone();

        registry.activate(&a);
        assert_eq!(registry.active_id(), Some(a.as_str()));

        // Redundant activation stays consistent
        registry.activate(&a);
        assert_eq!(registry.active_id(), Some(a.as_str()));

        registry.activate(&b);
        assert_eq!(registry.active_id(), Some(b.as_str()));
    }

    #[test]
    fn test_close_active_falls_back_to_first() {
        let mut registry = SessionRegistry::new();
        let a = registry.create().id.clone();
        let b = registry.create().id.clone();
        let c = registry.create().id.clone();

        registry.activate(&b);
        registry.close(&b);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.active_id(), Some(a.as_str()));
        assert!(registry.get(&c).is_some());
    }

    #[test]
    fn test_close_inactive_keeps_active() {
        let mut registry = SessionRegistry::new();
        let a = registry.create().id.clone();
        let b = registry.create().id.clone();

        registry.close(&a);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.active_id(), Some(b.as_str()));
    }

    #[test]
    fn test_close_last_session_is_noop() {
        let mut registry = SessionRegistry::new();
        let id = registry.create().id.clone();

        registry.close(&id);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.active_id(), Some(id.as_str()));

        // Closing an already-closed id is also a no-op
        registry.create();
        registry.close("no-such-session");
        assert_eq!(registry.len(), 2);
    }
}

//! Address bar synchronization
//!
//! The displayed address is always derived from the active session's
//! routed path, never from what the user last typed. Callers invoke this
//! after tab activation, creation, close, and successful submits; never
//! on keystrokes, so it cannot fight in-progress typing.

use veil_proxy::ProxyConfig;
use veil_tabs::Session;

/// Address bar text for a session, or empty when nothing applies.
///
/// Decode failures degrade to the raw routed path inside `from_routed`;
/// a missing proxy config degrades the same way.
pub fn compute_display(session: Option<&Session>, config: Option<&ProxyConfig>) -> String {
    let Some(session) = session else {
        return String::new();
    };

    let Some(routed) = session.routed_path() else {
        return String::new();
    };

    if routed.is_empty() {
        return String::new();
    }

    match config {
        Some(config) => config.from_routed(routed),
        None => routed.to_string(),
    }
}

//! Veil Tab System
//!
//! A tab is a session: a unit of browsing state that owns exactly one
//! rendering surface for its whole lifetime. The registry holds the open
//! sessions in tab-strip order and tracks which one is active.

mod error;
mod registry;
mod session;
mod surface;

pub use error::TabError;
pub use registry::SessionRegistry;
pub use session::{Session, PLACEHOLDER_TITLE};
pub use surface::Surface;

pub type Result<T> = std::result::Result<T, TabError>;

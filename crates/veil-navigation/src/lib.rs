//! Veil Navigation
//!
//! Address bar input resolution:
//! 1. Scheme-prefixed input → navigate to it unchanged
//! 2. Input without a dot → search engine query
//! 3. Anything else → bare domain, promoted to https
//!
//! Also home to the command vocabulary the controller dispatches on.

mod command;
mod error;
mod resolver;

pub use command::{NavDirection, UiCommand};
pub use error::NavigationError;
pub use resolver::{AddressResolver, DEFAULT_SEARCH_TEMPLATE};

pub type Result<T> = std::result::Result<T, NavigationError>;

//! Veil Storage Layer
//!
//! SQLite-based persistence for front-end settings. Sessions and surfaces
//! live for the process only and are never written here; the store holds
//! the small key-value set the UI reads at startup and writes on save.

mod database;
mod error;
mod migrations;

pub use database::Database;
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;

//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Proxy configuration not loaded")]
    ConfigMissing,

    #[error("Active session has no usable surface")]
    SurfaceNotFound,

    #[error("Navigation error: {0}")]
    Navigation(#[from] veil_navigation::NavigationError),

    #[error("Proxy error: {0}")]
    Proxy(#[from] veil_proxy::ProxyError),

    #[error("Tab error: {0}")]
    Tab(#[from] veil_tabs::TabError),

    #[error("Storage error: {0}")]
    Storage(#[from] veil_storage::StorageError),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::Config(e.to_string())
    }
}

//! Veil Core
//!
//! Central coordination layer for the Veil proxy front-end: the
//! controller that binds tab sessions to rendering surfaces, translates
//! typed addresses into routed paths, and keeps the address bar and
//! navigation chrome in sync with the active tab.

mod config;
mod controller;
mod device;
mod error;
mod export;
mod notice;
mod settings;
mod sync;
mod theme;

pub use config::Config;
pub use controller::{Controller, TabSummary};
pub use device::DeviceClass;
pub use error::CoreError;
pub use export::{NoopExporter, PageExporter};
pub use notice::{Notice, NOTICE_TTL_SECONDS};
pub use settings::Settings;
pub use sync::compute_display;
pub use theme::Theme;

// Re-export core components
pub use veil_navigation::{
    AddressResolver, NavDirection, NavigationError, UiCommand, DEFAULT_SEARCH_TEMPLATE,
};
pub use veil_proxy::{Base64Codec, ProxyConfig, ProxyError, UrlCodec};
pub use veil_storage::{Database, StorageError};
pub use veil_tabs::{Session, SessionRegistry, Surface, TabError, PLACEHOLDER_TITLE};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}

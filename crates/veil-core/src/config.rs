//! Front-end configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use veil_navigation::DEFAULT_SEARCH_TEMPLATE;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the settings database file
    pub database_path: PathBuf,
    /// Search engine URL template
    pub search_engine: String,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("veil.db"),
            search_engine: DEFAULT_SEARCH_TEMPLATE.to_string(),
        }
    }

    pub fn data_dir() -> PathBuf {
        std::env::var("VEIL_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".veil"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

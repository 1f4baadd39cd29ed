//! Settings snapshot
//!
//! The key-value set the front-end persists: read once at startup, written
//! back on explicit save. Key names match what the shipped UI stores.

use serde::{Deserialize, Serialize};

use veil_storage::Database;

use crate::theme;
use crate::Result;

pub const KEY_THEME: &str = "selectedTheme";
pub const KEY_TITLE: &str = "customTitle";
pub const KEY_ICON: &str = "customIcon";
pub const KEY_AUTO_ABOUT_BLANK: &str = "autoAboutBlank";
pub const KEY_AUTO_BLOB: &str = "autoBlob";

pub const DEFAULT_TITLE: &str = "Veil";
pub const DEFAULT_ICON: &str = "logo.png";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub selected_theme: String,
    pub custom_title: String,
    pub custom_icon: String,
    /// Divert submissions into a fresh about:blank window
    pub auto_about_blank: bool,
    /// Divert submissions into a blob document
    pub auto_blob: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            selected_theme: theme::DEFAULT_THEME.to_string(),
            custom_title: DEFAULT_TITLE.to_string(),
            custom_icon: DEFAULT_ICON.to_string(),
            auto_about_blank: false,
            auto_blob: false,
        }
    }
}

impl Settings {
    pub fn load(db: &Database) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            selected_theme: db.get_setting(KEY_THEME)?.unwrap_or(defaults.selected_theme),
            custom_title: db.get_setting(KEY_TITLE)?.unwrap_or(defaults.custom_title),
            custom_icon: db.get_setting(KEY_ICON)?.unwrap_or(defaults.custom_icon),
            auto_about_blank: db
                .get_setting(KEY_AUTO_ABOUT_BLANK)?
                .map(|v| v == "true")
                .unwrap_or(false),
            auto_blob: db
                .get_setting(KEY_AUTO_BLOB)?
                .map(|v| v == "true")
                .unwrap_or(false),
        })
    }

    pub fn save(&self, db: &Database) -> Result<()> {
        db.set_setting(KEY_THEME, &self.selected_theme)?;
        db.set_setting(KEY_TITLE, &self.custom_title)?;
        db.set_setting(KEY_ICON, &self.custom_icon)?;
        db.set_setting(
            KEY_AUTO_ABOUT_BLANK,
            if self.auto_about_blank { "true" } else { "false" },
        )?;
        db.set_setting(KEY_AUTO_BLOB, if self.auto_blob { "true" } else { "false" })?;

        tracing::info!(theme = %self.selected_theme, "Saved settings");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.selected_theme, "green");
        assert_eq!(settings.custom_title, "Veil");
        assert!(!settings.auto_about_blank);
        assert!(!settings.auto_blob);
    }

    #[test]
    fn test_load_missing_store_yields_defaults() {
        let db = Database::open_in_memory().unwrap();
        let settings = Settings::load(&db).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let db = Database::open_in_memory().unwrap();

        let settings = Settings {
            selected_theme: "gold".to_string(),
            custom_title: "My Pages".to_string(),
            custom_icon: "icon.svg".to_string(),
            auto_about_blank: true,
            auto_blob: false,
        };
        settings.save(&db).unwrap();

        let loaded = Settings::load(&db).unwrap();
        assert_eq!(loaded, settings);
    }
}

//! Database connection and settings operations

use chrono::Utc;
use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;
use std::sync::Arc;

use crate::migrations::run_migrations;
use crate::Result;

pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;

        // WAL mode for better concurrent performance
        let _: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;

        run_migrations(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        run_migrations(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn with_connection<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self.conn.lock();
        f(&conn)
    }

    pub fn get_setting(&self, key: &str) -> Result<Option<String>> {
        self.with_connection(|conn| {
            let value = conn
                .query_row("SELECT value FROM settings WHERE key = ?1", [key], |row| {
                    row.get(0)
                })
                .optional()?;
            Ok(value)
        })
    }

    pub fn set_setting(&self, key: &str, value: &str) -> Result<()> {
        let updated_at = Utc::now().to_rfc3339();
        self.with_connection(|conn| {
            conn.execute(
                "INSERT OR REPLACE INTO settings (key, value, updated_at) VALUES (?1, ?2, ?3)",
                rusqlite::params![key, value, updated_at],
            )?;
            Ok(())
        })?;

        Ok(())
    }

    pub fn delete_setting(&self, key: &str) -> Result<()> {
        self.with_connection(|conn| {
            conn.execute("DELETE FROM settings WHERE key = ?1", [key])?;
            Ok(())
        })
    }

    /// Drop every stored setting. Backs the "reset all settings" action.
    pub fn clear_settings(&self) -> Result<()> {
        self.with_connection(|conn| {
            conn.execute("DELETE FROM settings", [])?;
            Ok(())
        })?;

        tracing::info!("Cleared all settings");
        Ok(())
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            conn: Arc::clone(&self.conn),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setting_roundtrip() {
        let db = Database::open_in_memory().unwrap();

        assert_eq!(db.get_setting("selectedTheme").unwrap(), None);

        db.set_setting("selectedTheme", "green").unwrap();
        assert_eq!(
            db.get_setting("selectedTheme").unwrap(),
            Some("green".to_string())
        );

        // Overwrite keeps a single row per key
        db.set_setting("selectedTheme", "gold").unwrap();
        assert_eq!(
            db.get_setting("selectedTheme").unwrap(),
            Some("gold".to_string())
        );
    }

    #[test]
    fn test_delete_and_clear() {
        let db = Database::open_in_memory().unwrap();

        db.set_setting("customTitle", "Veil").unwrap();
        db.set_setting("customIcon", "logo.png").unwrap();

        db.delete_setting("customTitle").unwrap();
        assert_eq!(db.get_setting("customTitle").unwrap(), None);
        assert!(db.get_setting("customIcon").unwrap().is_some());

        db.clear_settings().unwrap();
        assert_eq!(db.get_setting("customIcon").unwrap(), None);
    }
}

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Boolean flags persisted by key
///
/// The onboarding guide only talks to this trait, so it can be driven by the
/// SQLite store in the app and by `MemoryStore` in tests.
pub trait FlagStore {
    /// Read a flag; an absent key reads as false
    fn flag(&self, key: &str) -> Result<bool>;

    /// Write a flag, replacing any previous value
    fn set_flag(&mut self, key: &str, value: bool) -> Result<()>;
}

/// SQLite-backed settings database.
///
/// The database file is created in the user's data directory:
/// - Linux: ~/.local/share/plantcare/plantcare.db
/// - macOS: ~/Library/Application Support/plantcare/plantcare.db
/// - Windows: %APPDATA%\plantcare\plantcare.db
pub struct SettingsStore {
    conn: Connection,
    db_path: Option<PathBuf>,
}

impl SettingsStore {
    /// Open (or create) the settings database in the user's data directory
    pub fn open_default() -> Result<Self> {
        Self::open(&Self::default_path()?)
    }

    /// Open (or create) the settings database at `db_path`
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(db_path)?;
        info!("Settings database at: {}", db_path.display());

        let store = SettingsStore {
            conn,
            db_path: Some(db_path.to_path_buf()),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// A database that lives only as long as this store
    #[cfg(test)]
    pub fn in_memory() -> Result<Self> {
        let store = SettingsStore {
            conn: Connection::open_in_memory()?,
            db_path: None,
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Get the path where the database should be stored
    fn default_path() -> Result<PathBuf> {
        let mut path = dirs::data_dir()
            .or_else(dirs::home_dir)
            .ok_or(Error::NoDirectory { kind: "data" })?;

        path.push("plantcare");
        path.push("plantcare.db");
        Ok(path)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS settings (
                key             TEXT PRIMARY KEY,
                value           TEXT NOT NULL,
                updated_at      INTEGER NOT NULL
            )",
            [],
        )?;

        debug!("Settings schema initialized");
        Ok(())
    }

    /// Path to the database file, None for an in-memory store
    #[cfg(test)]
    pub fn path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }
}

impl FlagStore for SettingsStore {
    fn flag(&self, key: &str) -> Result<bool> {
        let value: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;

        Ok(value.as_deref() == Some("true"))
    }

    fn set_flag(&mut self, key: &str, value: bool) -> Result<()> {
        self.conn.execute(
            "INSERT INTO settings (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            rusqlite::params![key, value.to_string(), Utc::now().timestamp()],
        )?;
        debug!("Flag {} = {}", key, value);
        Ok(())
    }
}

impl std::fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsStore")
            .field("db_path", &self.db_path)
            .finish()
    }
}

/// Non-persistent flag store
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    flags: HashMap<String, bool>,
}

impl FlagStore for MemoryStore {
    fn flag(&self, key: &str) -> Result<bool> {
        Ok(self.flags.get(key).copied().unwrap_or(false))
    }

    fn set_flag(&mut self, key: &str, value: bool) -> Result<()> {
        self.flags.insert(key.to_string(), value);
        Ok(())
    }
}

impl<S: FlagStore + ?Sized> FlagStore for Box<S> {
    fn flag(&self, key: &str) -> Result<bool> {
        (**self).flag(key)
    }

    fn set_flag(&mut self, key: &str, value: bool) -> Result<()> {
        (**self).set_flag(key, value)
    }
}

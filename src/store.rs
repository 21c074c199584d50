use log::warn;
use rusqlite::Connection;
use std::path::PathBuf;
use thiserror::Error;

use crate::models::{Theme, TimesheetEntry};

/// Key under which the serialized entry collection is stored
const ENTRIES_KEY: &str = "timesheetEntries";
/// Key under which the theme token is stored
const THEME_KEY: &str = "timesheetTheme";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    SqliteError(#[from] rusqlite::Error),
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),
    #[error("Failed to create store directory: {0}")]
    DirectoryError(String),
}

/// Durable local key-value store backing the timesheet.
///
/// Two independently keyed values live here: the entry collection (one JSON
/// array, rewritten whole on every save) and the theme token. They have no
/// cross-consistency requirement and are read/written at different times.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (or create) the store at the given path and initialize the schema
    pub fn new(path: &str) -> Result<Self, StoreError> {
        let db_path = PathBuf::from(path);

        // Create parent directory if it doesn't exist
        if let Some(parent) = db_path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| StoreError::DirectoryError(e.to_string()))?;
            }
        }

        // Open or create the database
        let conn = Connection::open(&db_path)?;

        let store = Store { conn };
        store.initialize_schema()?;

        Ok(store)
    }

    fn initialize_schema(&self) -> Result<(), StoreError> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key             TEXT PRIMARY KEY,
                value           TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    /// Get a reference to the underlying connection
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Read the stored entry collection. Missing data means a first run and
    /// yields an empty collection; an unreadable payload is logged and also
    /// yields an empty collection rather than failing the caller.
    pub fn load_entries(&self) -> Vec<TimesheetEntry> {
        match self.get_value(ENTRIES_KEY) {
            Ok(None) => Vec::new(),
            Ok(Some(payload)) => match serde_json::from_str(&payload) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("stored entries are unreadable, starting empty: {}", e);
                    Vec::new()
                }
            },
            Err(e) => {
                warn!("failed to read stored entries, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Serialize and write the full entry collection. Always a full replace,
    /// never an incremental update.
    pub fn save_entries(&self, entries: &[TimesheetEntry]) -> Result<(), StoreError> {
        let payload = serde_json::to_string(entries)?;
        self.put_value(ENTRIES_KEY, &payload)
    }

    /// Read the stored theme token. Absent or unrecognized values fall back
    /// to the default theme.
    pub fn load_theme(&self) -> Theme {
        match self.get_value(THEME_KEY) {
            Ok(Some(token)) => Theme::from_str_lossy(&token),
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!("failed to read stored theme, using default: {}", e);
                Theme::default()
            }
        }
    }

    pub fn save_theme(&self, theme: Theme) -> Result<(), StoreError> {
        self.put_value(THEME_KEY, theme.as_str())
    }

    fn get_value(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(rusqlite::params![key], |row| row.get(0));

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StoreError::from(e)),
        }
    }

    fn put_value(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            rusqlite::params![key, value],
        )?;
        tx.commit()?;
        Ok(())
    }
}

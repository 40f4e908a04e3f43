use std::path::Path;
use std::sync::Mutex;

use rusqlite::{Connection, OptionalExtension};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Store lock poisoned")]
    Poisoned,
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Persistent string-keyed store on SQLite.
///
/// SQLite was chosen because:
/// - Zero-config embedded database
/// - Survives process restarts, which is the whole point of a daily cache
/// - Doesn't require a separate process
///
/// Values are opaque strings; the caller decides what JSON lives inside.
/// The connection sits behind a mutex so the store can be shared across
/// tasks.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// In-memory store, handy for tests
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL DEFAULT (strftime('%s','now'))
            )",
            [],
        )?;
        Ok(())
    }

    fn conn(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn()?;
        let value = conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO kv (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s','now'))
             ON CONFLICT(key) DO UPDATE SET
                 value = excluded.value,
                 updated_at = excluded.updated_at",
            [key, value],
        )?;
        debug!("stored {} ({} bytes)", key, value.len());
        Ok(())
    }

    pub fn delete(&self, key: &str) -> Result<()> {
        let conn = self.conn()?;
        conn.execute("DELETE FROM kv WHERE key = ?1", [key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_none_for_missing_key() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.get("daily-artwork").unwrap(), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let store = SqliteStore::open_in_memory().unwrap();
        store
            .set("daily-artwork", r#"{"date":"2026-08-07"}"#)
            .unwrap();
        assert_eq!(
            store.get("daily-artwork").unwrap().as_deref(),
            Some(r#"{"date":"2026-08-07"}"#)
        );
    }

    #[test]
    fn set_overwrites_existing_value() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.set("daily-artwork", "old").unwrap();
        store.set("daily-artwork", "new").unwrap();
        assert_eq!(store.get("daily-artwork").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn delete_removes_key() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.set("daily-artwork", "value").unwrap();
        store.delete("daily-artwork").unwrap();
        assert_eq!(store.get("daily-artwork").unwrap(), None);
    }

    #[test]
    fn delete_of_missing_key_is_fine() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.delete("never-written").unwrap();
    }
}

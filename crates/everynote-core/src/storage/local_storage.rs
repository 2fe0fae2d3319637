//! Key/value local storage

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use rusqlite::{params, Connection, OptionalExtension};

use super::Database;
use crate::error::{Error, Result};

/// Synchronous string key/value storage.
///
/// Mirrors the browser `localStorage` surface: absent keys read as `None`,
/// writes replace, and removing an absent key is not an error.
pub trait LocalStorage {
    /// Read the value stored under `key`
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// `SQLite`-backed local storage.
///
/// Cloning shares the same connection.
#[derive(Clone)]
pub struct SqliteLocalStorage {
    db: Arc<Mutex<Database>>,
}

impl SqliteLocalStorage {
    /// Wrap an already opened database
    pub fn new(db: Database) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
        }
    }

    /// Open (or create) the storage file at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(Database::open(path)?))
    }

    /// Open a throwaway in-memory store
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::new(Database::open_in_memory()?))
    }

    fn with_connection<T>(&self, f: impl FnOnce(&Connection) -> Result<T>) -> Result<T> {
        let db = self.db.lock().map_err(|_| Error::LockPoisoned)?;
        f(db.connection())
    }
}

impl LocalStorage for SqliteLocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.with_connection(|conn| {
            let value = conn
                .query_row(
                    "SELECT value FROM local_storage WHERE key = ?",
                    params![key],
                    |row| row.get(0),
                )
                .optional()?;
            Ok(value)
        })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.with_connection(|conn| {
            conn.execute(
                "INSERT OR REPLACE INTO local_storage (key, value) VALUES (?, ?)",
                params![key, value],
            )?;
            Ok(())
        })
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.with_connection(|conn| {
            conn.execute("DELETE FROM local_storage WHERE key = ?", params![key])?;
            Ok(())
        })
    }
}

/// In-process storage with no persistence beyond its clones
#[derive(Clone, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.items.lock().map_err(|_| Error::LockPoisoned)?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items.lock().map_err(|_| Error::LockPoisoned)?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self.items.lock().map_err(|_| Error::LockPoisoned)?;
        items.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn exercise(storage: &impl LocalStorage) {
        assert_eq!(storage.get_item("notes").unwrap(), None);

        storage.set_item("notes", "[]").unwrap();
        assert_eq!(storage.get_item("notes").unwrap().as_deref(), Some("[]"));

        storage.set_item("notes", "[1]").unwrap();
        assert_eq!(storage.get_item("notes").unwrap().as_deref(), Some("[1]"));

        storage.remove_item("notes").unwrap();
        assert_eq!(storage.get_item("notes").unwrap(), None);

        // Removing an absent key is fine
        storage.remove_item("notes").unwrap();
    }

    #[test]
    fn test_sqlite_storage_get_set_remove() {
        let storage = SqliteLocalStorage::open_in_memory().unwrap();
        exercise(&storage);
    }

    #[test]
    fn test_memory_storage_get_set_remove() {
        exercise(&MemoryStorage::new());
    }

    #[test]
    fn test_clones_share_items() {
        let storage = SqliteLocalStorage::open_in_memory().unwrap();
        let other = storage.clone();

        storage.set_item("user", "{}").unwrap();
        assert_eq!(other.get_item("user").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_sqlite_storage_survives_reopen() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("local_storage.db");

        {
            let storage = SqliteLocalStorage::open(&path).unwrap();
            storage.set_item("user", r#"{"name":"Ada"}"#).unwrap();
        }

        let reopened = SqliteLocalStorage::open(&path).unwrap();
        assert_eq!(
            reopened.get_item("user").unwrap().as_deref(),
            Some(r#"{"name":"Ada"}"#)
        );
    }
}

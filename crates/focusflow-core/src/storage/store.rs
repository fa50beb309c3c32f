//! SQLite-backed key-value persistence.
//!
//! All records are UTF-8 JSON text stored in a single `kv(key, value)`
//! table. There is no schema version field; a record that fails to parse
//! reads as [`Loaded::Corrupt`] and every caller substitutes its default,
//! so a damaged store self-heals instead of propagating parse errors.

use rusqlite::{params, Connection};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::StoreError;

/// Outcome of reading a typed record.
///
/// `Corrupt` is distinguishable from `Missing` so tests and callers can
/// detect damaged state, even though both fall back to defaults at the
/// public API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loaded<T> {
    /// The record exists and parsed cleanly.
    Present(T),
    /// No record under this key.
    Missing,
    /// A record exists but is not valid JSON for the expected type.
    Corrupt,
}

impl<T> Loaded<T> {
    /// The parsed value, or the type's default for `Missing`/`Corrupt`.
    pub fn or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Loaded::Present(v) => v,
            Loaded::Missing | Loaded::Corrupt => T::default(),
        }
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, Loaded::Corrupt)
    }
}

/// Namespaced key-value store.
///
/// Keys follow the layout in [`super::keys`]; values are JSON text.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open the store at `<data_dir>/focusflow.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, StoreError> {
        let dir = data_dir().map_err(|e| StoreError::QueryFailed(e.to_string()))?;
        Self::open_at(dir.join("focusflow.db"))
    }

    /// Open the store at an explicit path.
    pub fn open_at<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|source| StoreError::OpenFailed {
            path: PathBuf::from(path),
            source,
        })?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    /// Open an in-memory store (for tests and tools).
    pub fn open_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(StoreError::from)?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Get the raw value under a key.
    pub fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Set the raw value under a key.
    pub fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// Remove a key. Removing an absent key is not an error.
    pub fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }

    /// Read a JSON record.
    ///
    /// A malformed record logs a warning and reads as [`Loaded::Corrupt`];
    /// it is never an error.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Loaded<T>, StoreError> {
        match self.get(key)? {
            None => Ok(Loaded::Missing),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => Ok(Loaded::Present(value)),
                Err(e) => {
                    log::warn!("malformed record under '{key}', treating as absent: {e}");
                    Ok(Loaded::Corrupt)
                }
            },
        }
    }

    /// Write a JSON record, replacing any previous value under the key.
    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|source| StoreError::EncodeFailed {
            key: key.to_string(),
            source,
        })?;
        self.set(key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kv_roundtrip() {
        let store = Store::open_memory().unwrap();
        assert!(store.get("test").unwrap().is_none());
        store.set("test", "hello").unwrap();
        assert_eq!(store.get("test").unwrap().unwrap(), "hello");
        store.remove("test").unwrap();
        assert!(store.get("test").unwrap().is_none());
    }

    #[test]
    fn remove_absent_key_is_ok() {
        let store = Store::open_memory().unwrap();
        store.remove("never-set").unwrap();
    }

    #[test]
    fn json_roundtrip() {
        let store = Store::open_memory().unwrap();
        store.set_json("nums", &vec![1u32, 2, 3]).unwrap();
        let loaded: Loaded<Vec<u32>> = store.get_json("nums").unwrap();
        assert_eq!(loaded, Loaded::Present(vec![1, 2, 3]));
    }

    #[test]
    fn missing_vs_corrupt_are_distinguishable() {
        let store = Store::open_memory().unwrap();
        let loaded: Loaded<Vec<u32>> = store.get_json("absent").unwrap();
        assert_eq!(loaded, Loaded::Missing);

        store.set("bad", "{not json").unwrap();
        let loaded: Loaded<Vec<u32>> = store.get_json("bad").unwrap();
        assert!(loaded.is_corrupt());
        assert_eq!(loaded.or_default(), Vec::<u32>::new());
    }

    #[test]
    fn opens_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("focusflow.db");
        {
            let store = Store::open_at(&path).unwrap();
            store.set("persisted", "yes").unwrap();
        }
        let store = Store::open_at(&path).unwrap();
        assert_eq!(store.get("persisted").unwrap().unwrap(), "yes");
    }
}

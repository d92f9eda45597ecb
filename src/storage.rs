//! Durable key-value storage for the client session.
//!
//! The store is a single JSON object on disk. Each entry is a string; the
//! `user` entry holds a JSON document encoded as a string.

use crate::consts::cli_consts::{SESSION_DIR, SESSION_FILE};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage file is not a valid JSON object: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not determine the home directory")]
    NoHomeDir,
}

pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value, or `None` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.set_many(&[(key, value)])
    }

    /// Stores several values in one write, so they change together or not at all.
    fn set_many(&self, entries: &[(&str, &str)]) -> Result<(), StorageError>;

    /// Removes the given keys in one write.
    fn remove(&self, keys: &[&str]) -> Result<(), StorageError>;
}

/// Path of the session file: `~/.parkctl/session.json`.
pub fn get_session_path() -> Result<PathBuf, StorageError> {
    let home = home::home_dir().ok_or(StorageError::NoHomeDir)?;
    Ok(home.join(SESSION_DIR).join(SESSION_FILE))
}

/// A [`KeyValueStore`] backed by one JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Map<String, Value>, StorageError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let buf = fs::read(&self.path)?;
        Ok(serde_json::from_slice(&buf)?)
    }

    /// Entries to start a write from. A corrupt file is replaced rather than
    /// blocking new writes; an unreadable one is an error.
    fn load_for_write(&self) -> Result<Map<String, Value>, StorageError> {
        match self.load() {
            Ok(entries) => Ok(entries),
            Err(StorageError::Json(e)) => {
                log::warn!("Replacing corrupt session file: {}", e);
                Ok(Map::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Writes the entries back. An empty store deletes the file.
    fn save(&self, entries: &Map<String, Value>) -> Result<(), StorageError> {
        if entries.is_empty() {
            if self.path.exists() {
                fs::remove_file(&self.path)?;
            }
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.load()?;
        Ok(entries
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    fn set_many(&self, entries: &[(&str, &str)]) -> Result<(), StorageError> {
        let mut stored = self.load_for_write()?;
        for (key, value) in entries {
            stored.insert(key.to_string(), Value::String(value.to_string()));
        }
        self.save(&stored)
    }

    fn remove(&self, keys: &[&str]) -> Result<(), StorageError> {
        let mut entries = self.load_for_write()?;
        for key in keys {
            entries.remove(*key);
        }
        self.save(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    // A stored value should be returned by a later read.
    fn test_get_recovers_saved_value() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("session.json"));

        store.set("token", "abc").unwrap();
        assert_eq!(store.get("token").unwrap(), Some("abc".to_string()));
        assert_eq!(store.get("user").unwrap(), None);
    }

    #[test]
    // Saving should create missing parent directories.
    fn test_set_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("session.json");
        let store = FileStore::new(&path);

        store.set("token", "abc").unwrap();
        assert!(path.exists(), "Session file was not created");
    }

    #[test]
    // Setting a key twice keeps only the latest value and leaves other keys alone.
    fn test_set_overwrites_single_key() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("session.json"));

        store.set("token", "first").unwrap();
        store.set("user", r#"{"id":1,"role":"user"}"#).unwrap();
        store.set("token", "second").unwrap();

        assert_eq!(store.get("token").unwrap(), Some("second".to_string()));
        assert_eq!(
            store.get("user").unwrap(),
            Some(r#"{"id":1,"role":"user"}"#.to_string())
        );
    }

    #[test]
    // Removing every key deletes the file; removing from a missing file is fine.
    fn test_remove_all_keys_deletes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = FileStore::new(&path);

        store.set("token", "abc").unwrap();
        store.set("user", "{}").unwrap();
        store.remove(&["token", "user"]).unwrap();
        assert!(!path.exists());

        store.remove(&["token", "user"]).unwrap();
    }

    #[test]
    // Reading a corrupt file is an error, but it can still be cleared and rewritten.
    fn test_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.get("token"), Err(StorageError::Json(_))));

        store.remove(&["token"]).unwrap();
        assert!(!path.exists());

        store.set("token", "fresh").unwrap();
        assert_eq!(store.get("token").unwrap(), Some("fresh".to_string()));
    }

    #[test]
    // Both entries land in the file together.
    fn test_set_many_writes_all_entries() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("session.json"));

        store.set("theme", "dark").unwrap();
        store
            .set_many(&[("token", "T"), ("user", r#"{"id":1}"#)])
            .unwrap();

        assert_eq!(store.get("token").unwrap(), Some("T".to_string()));
        assert_eq!(store.get("user").unwrap(), Some(r#"{"id":1}"#.to_string()));
        assert_eq!(store.get("theme").unwrap(), Some("dark".to_string()));
    }

    #[test]
    // Only a corrupt file is discarded before a write; a read failure is reported.
    fn test_unreadable_file_is_not_overwritten() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::create_dir_all(&path).unwrap();
        let store = FileStore::new(&path);

        assert!(matches!(store.load_for_write(), Err(StorageError::Io(_))));
        assert!(matches!(store.set("token", "T"), Err(StorageError::Io(_))));
        assert!(matches!(store.remove(&["token"]), Err(StorageError::Io(_))));
        assert!(path.is_dir());

        let corrupt = FileStore::new(dir.path().join("corrupt.json"));
        fs::write(corrupt.path(), "invalid json").unwrap();
        assert!(corrupt.load_for_write().unwrap().is_empty());
    }
}

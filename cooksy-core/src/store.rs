//! Key-value persistence for session state.
//!
//! The discovery and submission workflows keep small pieces of state (the
//! auth token, the recipe selected for the detail page) in an injected
//! [`KeyValueStore`] rather than touching any storage directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::StoreError;

/// String-to-string storage with last-write-wins semantics.
///
/// Implementations are synchronous; values are small (a token, one recipe).
pub trait KeyValueStore: Send + Sync {
    /// Get the value for a key, or `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Set a key, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Entry format for [`DiskStore`] files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredEntry {
    value: String,
    updated_at: DateTime<Utc>,
}

/// Disk-backed store keeping one JSON file per key.
pub struct DiskStore {
    dir: PathBuf,
}

impl DiskStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Get the default store directory: ~/.cooksy/store
    pub fn default_dir() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".cooksy").join("store"))
            .unwrap_or_else(|| PathBuf::from("data/store"))
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", sanitize_key(key)))
    }
}

impl KeyValueStore for DiskStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.key_path(key);
        if !path.exists() {
            return None;
        }
        let raw = fs::read_to_string(&path).ok()?;
        let entry: StoredEntry = serde_json::from_str(&raw).ok()?;
        Some(entry.value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let entry = StoredEntry {
            value: value.to_string(),
            updated_at: Utc::now(),
        };
        fs::write(self.key_path(key), serde_json::to_string_pretty(&entry)?)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// Keys may not be valid file names; keep alphanumerics and a few safe
/// characters, replace the rest.
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.write().unwrap().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_disk_store_round_trip() {
        let temp = TempDir::new().unwrap();
        let store = DiskStore::new(temp.path().to_path_buf());

        assert_eq!(store.get("token"), None);
        store.set("token", "abc123").unwrap();
        assert_eq!(store.get("token"), Some("abc123".to_string()));

        store.set("token", "def456").unwrap();
        assert_eq!(store.get("token"), Some("def456".to_string()));
    }

    #[test]
    fn test_disk_store_remove_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let store = DiskStore::new(temp.path().to_path_buf());

        store.set("token", "abc123").unwrap();
        store.remove("token").unwrap();
        assert_eq!(store.get("token"), None);
        store.remove("token").unwrap();
    }

    #[test]
    fn test_disk_store_corrupt_entry_reads_as_absent() {
        let temp = TempDir::new().unwrap();
        let store = DiskStore::new(temp.path().to_path_buf());

        store.set("selectedRecipe", "{}").unwrap();
        fs::write(store.key_path("selectedRecipe"), "not json").unwrap();
        assert_eq!(store.get("selectedRecipe"), None);
    }

    #[test]
    fn test_sanitize_key_keeps_safe_characters() {
        assert_eq!(sanitize_key("selectedRecipe"), "selectedRecipe");
        assert_eq!(sanitize_key("a/b\\c:d"), "a-b-c-d");
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("token"), None);
        store.set("token", "abc").unwrap();
        assert_eq!(store.get("token"), Some("abc".to_string()));
        store.remove("token").unwrap();
        assert_eq!(store.get("token"), None);
    }
}

//! Key-value persistence for the source text and its name
//!
//! The lifecycle manager only needs "save a string, load it back later".
//! Two stores are provided: an in-memory map and a single JSON file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use ahash::AHashMap;

use crate::error::{SourceError, SourceResult};

/// Key holding the raw source text
pub const SOURCE_TEXT_KEY: &str = "sourceText";

/// Key holding the source display name
pub const SOURCE_NAME_KEY: &str = "sourceName";

/// String-valued key-value store
pub trait SourceStore {
    /// Load a value; `None` when the key is absent
    fn load(&self, key: &str) -> SourceResult<Option<String>>;

    /// Save two entries as one unit
    ///
    /// Either both entries are stored or neither is.
    fn save_pair(&mut self, entries: [(&str, &str); 2]) -> SourceResult<()>;

    /// Flush buffered writes
    fn flush(&mut self) -> SourceResult<()> {
        Ok(())
    }
}

impl<S: SourceStore + ?Sized> SourceStore for Box<S> {
    fn load(&self, key: &str) -> SourceResult<Option<String>> {
        (**self).load(key)
    }

    fn save_pair(&mut self, entries: [(&str, &str); 2]) -> SourceResult<()> {
        (**self).save_pair(entries)
    }

    fn flush(&mut self) -> SourceResult<()> {
        (**self).flush()
    }
}

// ============================================================================
// MemoryStore
// ============================================================================

/// In-memory store, lost when dropped
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: AHashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with entries
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        MemoryStore {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            writes: 0,
        }
    }

    /// Borrow a stored value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of `save_pair` calls so far
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl SourceStore for MemoryStore {
    fn load(&self, key: &str) -> SourceResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save_pair(&mut self, entries: [(&str, &str); 2]) -> SourceResult<()> {
        for (key, value) in entries {
            self.entries.insert(key.to_string(), value.to_string());
        }
        self.writes += 1;
        Ok(())
    }
}

// ============================================================================
// JsonFileStore
// ============================================================================

/// Store backed by one JSON object on disk
///
/// Every save rewrites the whole file through a temporary sibling and a
/// rename, so a crash never leaves a half-written store behind.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open a store file, starting empty if it does not exist yet
    pub fn open(path: impl Into<PathBuf>) -> SourceResult<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            BTreeMap::new()
        };

        log::debug!("Opened store {} ({} keys)", path.display(), entries.len());
        Ok(JsonFileStore { path, entries })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_file(&self) -> SourceResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        let content = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl SourceStore for JsonFileStore {
    fn load(&self, key: &str) -> SourceResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save_pair(&mut self, entries: [(&str, &str); 2]) -> SourceResult<()> {
        let previous = self.entries.clone();
        for (key, value) in entries {
            self.entries.insert(key.to_string(), value.to_string());
        }

        if let Err(e) = self.write_file() {
            self.entries = previous;
            let message = format!("{} (saved together with '{}')", e, entries[1].0);
            return Err(SourceError::store(entries[0].0, message));
        }
        Ok(())
    }

    fn flush(&mut self) -> SourceResult<()> {
        self.write_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_absent_key() {
        let store = MemoryStore::new();
        assert_eq!(store.load(SOURCE_TEXT_KEY).unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_memory_store_save_pair() {
        let mut store = MemoryStore::new();
        store
            .save_pair([(SOURCE_TEXT_KEY, "1\nc\nH 0 0 0"), (SOURCE_NAME_KEY, "h.xyz")])
            .unwrap();

        assert_eq!(store.get(SOURCE_TEXT_KEY), Some("1\nc\nH 0 0 0"));
        assert_eq!(store.get(SOURCE_NAME_KEY), Some("h.xyz"));
        assert_eq!(store.len(), 2);
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn test_json_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("source.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.load(SOURCE_NAME_KEY).unwrap(), None);
        store
            .save_pair([(SOURCE_TEXT_KEY, "0\nempty\n"), (SOURCE_NAME_KEY, "empty.xyz")])
            .unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(
            reopened.load(SOURCE_TEXT_KEY).unwrap().as_deref(),
            Some("0\nempty\n")
        );
        assert_eq!(
            reopened.load(SOURCE_NAME_KEY).unwrap().as_deref(),
            Some("empty.xyz")
        );
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_json_store_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("source.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(
            JsonFileStore::open(&path),
            Err(SourceError::Serialization(_))
        ));
    }

    #[test]
    fn test_json_store_failed_write_keeps_entries() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes the rename fail
        let path = dir.path().join("source.json");
        fs::create_dir(&path).unwrap();

        let mut store = JsonFileStore {
            path: path.clone(),
            entries: BTreeMap::new(),
        };
        let result = store.save_pair([(SOURCE_TEXT_KEY, "x"), (SOURCE_NAME_KEY, "y")]);

        match result {
            Err(SourceError::Store { key, .. }) => assert_eq!(key, SOURCE_TEXT_KEY),
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(store.load(SOURCE_TEXT_KEY).unwrap(), None);
    }
}

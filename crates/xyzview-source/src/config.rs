//! Store configuration
//!
//! Decides where the source text is persisted. Configuration comes from a
//! JSON file named by `XYZVIEW_CONFIG`, or from `XYZVIEW_STORE` pointing
//! straight at a store file. Without either, sources live in memory only.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SourceResult;
use crate::store::{JsonFileStore, MemoryStore, SourceStore};

/// Environment variable naming a JSON config file
pub const CONFIG_ENV: &str = "XYZVIEW_CONFIG";

/// Environment variable naming the store file directly
pub const STORE_ENV: &str = "XYZVIEW_STORE";

/// Options for the source lifecycle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// JSON store file; `None` keeps everything in memory
    pub store_path: Option<PathBuf>,
}

impl SourceConfig {
    /// Create the default (in-memory) configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the store file
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = Some(path.into());
        self
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> SourceResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Build the configuration from the environment
    pub fn from_env() -> SourceResult<Self> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            log::debug!("Loading config from {}", Path::new(&path).display());
            return Self::load(Path::new(&path));
        }

        let mut config = Self::new();
        if let Some(path) = std::env::var_os(STORE_ENV) {
            config.store_path = Some(PathBuf::from(path));
        }
        Ok(config)
    }

    /// Open the configured store
    pub fn open_store(&self) -> SourceResult<Box<dyn SourceStore + Send>> {
        match &self.store_path {
            Some(path) => Ok(Box::new(JsonFileStore::open(path)?)),
            None => Ok(Box::new(MemoryStore::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SOURCE_TEXT_KEY;

    #[test]
    fn test_default_is_memory() {
        let config = SourceConfig::new();
        assert_eq!(config.store_path, None);

        let store = config.open_store().unwrap();
        assert_eq!(store.load(SOURCE_TEXT_KEY).unwrap(), None);
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("xyzview.json");
        std::fs::write(&config_path, r#"{ "store_path": "/var/lib/xyzview/source.json" }"#)
            .unwrap();

        let config = SourceConfig::load(&config_path).unwrap();
        assert_eq!(
            config,
            SourceConfig::new().with_store_path("/var/lib/xyzview/source.json")
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: SourceConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SourceConfig::default());
    }

    #[test]
    fn test_open_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("source.json");

        let mut store = SourceConfig::new().with_store_path(&path).open_store().unwrap();
        store
            .save_pair([(SOURCE_TEXT_KEY, "0\n\n"), ("sourceName", "empty.xyz")])
            .unwrap();

        assert!(path.exists());
    }
}

//! Screen configuration
//!
//! Read from an optional JSON settings file; anything missing falls back to
//! the built-in defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::error::ConfigError;
use crate::profile::Bundle;
use crate::storage::SourceKind;

/// Settings file looked up in the working directory by the binary
pub const CONFIG_FILE: &str = "json-example.json";

/// Storage locations and source order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding every persisted friends copy
    pub documents_dir: PathBuf,
    /// Directory to read the bundled document from (None = compiled-in copy)
    pub bundle_dir: Option<PathBuf>,

    // === File names inside documents_dir ===
    pub archive_file: String,
    pub json_file: String,
    pub preferences_file: String,

    /// Key of the friends entry in the preferences file
    pub preferences_key: String,

    /// Sources tried on load, first hit wins
    pub load_order: Vec<SourceKind>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            documents_dir: PathBuf::from("documents"),
            bundle_dir: None,

            archive_file: consts::ARCHIVE_FILE.to_string(),
            json_file: consts::JSON_FILE.to_string(),
            preferences_file: consts::PREFERENCES_FILE.to_string(),

            preferences_key: consts::PREFERENCES_KEY.to_string(),

            // Preferences are written on every save but not read back unless
            // explicitly listed here.
            load_order: vec![SourceKind::Archive, SourceKind::Json],
        }
    }
}

impl Config {
    /// Default config rooted at another documents directory
    pub fn with_documents_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            documents_dir: dir.into(),
            ..Self::default()
        }
    }

    pub fn archive_path(&self) -> PathBuf {
        self.documents_dir.join(&self.archive_file)
    }

    pub fn json_path(&self) -> PathBuf {
        self.documents_dir.join(&self.json_file)
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.documents_dir.join(&self.preferences_file)
    }

    /// Where the bundled profile document comes from
    pub fn bundle(&self) -> Bundle {
        match &self.bundle_dir {
            Some(dir) => Bundle::Directory(dir.clone()),
            None => Bundle::Embedded,
        }
    }

    /// Read a settings file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read a settings file, falling back to defaults when absent or invalid
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_skips_preferences_on_load() {
        let config = Config::default();
        assert_eq!(config.load_order, vec![SourceKind::Archive, SourceKind::Json]);
        assert_eq!(config.preferences_key, "me.jglievano.data");
        assert!(config.bundle_dir.is_none());
    }

    #[test]
    fn test_paths_join_documents_dir() {
        let config = Config::with_documents_dir("/tmp/docs");
        assert_eq!(config.archive_path(), PathBuf::from("/tmp/docs/keyed"));
        assert_eq!(config.json_path(), PathBuf::from("/tmp/docs/example.json"));
        assert_eq!(
            config.preferences_path(),
            PathBuf::from("/tmp/docs/preferences.json")
        );
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{"load_order": ["preferences", "json"]}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.load_order, vec![SourceKind::Preferences, SourceKind::Json]);
        assert_eq!(config.archive_file, "keyed");
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));
        assert_eq!(Config::load_or_default(&path), Config::default());
        assert_eq!(
            Config::load_or_default(&dir.path().join("missing.json")),
            Config::default()
        );
    }
}

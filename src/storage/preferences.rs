//! Key-value preferences
//!
//! A small JSON object on disk, one value per namespaced key. The friends
//! list is a single entry; other keys in the file are left alone.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde_json::Value;

use super::{FriendsStore, SourceKind, atomic_write, read_if_exists};
use crate::error::StorageError;

/// Preferences file handle
#[derive(Debug, Clone)]
pub struct Preferences {
    path: PathBuf,
}

impl Preferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<BTreeMap<String, Value>, StorageError> {
        match read_if_exists(&self.path)? {
            Some(bytes) => serde_json::from_slice(&bytes).map_err(|source| StorageError::Json {
                path: self.path.clone(),
                source,
            }),
            None => Ok(BTreeMap::new()),
        }
    }

    fn write_all(&self, entries: &BTreeMap<String, Value>) -> Result<(), StorageError> {
        let json = serde_json::to_vec_pretty(entries).map_err(|source| StorageError::Json {
            path: self.path.clone(),
            source,
        })?;
        atomic_write(&self.path, &json)
    }

    /// Value stored under `key`
    pub fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    /// Insert or replace `key`
    pub fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        // An unreadable file is replaced rather than blocking the write
        let mut entries = self.read_all().unwrap_or_else(|e| {
            log::warn!("Discarding unreadable preferences: {e}");
            BTreeMap::new()
        });
        entries.insert(key.to_string(), value);
        self.write_all(&entries)
    }

    /// Friends adapter bound to one key
    pub fn entry(&self, key: impl Into<String>) -> PreferencesEntry {
        PreferencesEntry {
            preferences: self.clone(),
            key: key.into(),
        }
    }
}

/// Friends list stored under one preferences key
#[derive(Debug, Clone)]
pub struct PreferencesEntry {
    preferences: Preferences,
    key: String,
}

impl FriendsStore for PreferencesEntry {
    fn kind(&self) -> SourceKind {
        SourceKind::Preferences
    }

    fn load(&self) -> Result<Option<Vec<String>>, StorageError> {
        let Some(value) = self.preferences.get(&self.key)? else {
            return Ok(None);
        };
        serde_json::from_value(value)
            .map(Some)
            .map_err(|source| StorageError::Json {
                path: self.preferences.path.clone(),
                source,
            })
    }

    fn save(&self, friends: &[String]) -> Result<(), StorageError> {
        let value = Value::from(friends.to_vec());
        self.preferences.set(&self.key, value)
    }
}

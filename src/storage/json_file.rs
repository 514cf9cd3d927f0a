//! JSON friends file
//!
//! Lives in the documents directory, separate from the read-only bundled copy.

use std::path::PathBuf;

use super::{FriendsStore, SourceKind, atomic_write, read_if_exists};
use crate::error::StorageError;

/// Friends list stored as a JSON array of strings
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl FriendsStore for JsonFile {
    fn kind(&self) -> SourceKind {
        SourceKind::Json
    }

    fn load(&self) -> Result<Option<Vec<String>>, StorageError> {
        let Some(bytes) = read_if_exists(&self.path)? else {
            return Ok(None);
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| StorageError::Json {
                path: self.path.clone(),
                source,
            })
    }

    fn save(&self, friends: &[String]) -> Result<(), StorageError> {
        let json = serde_json::to_vec(friends).map_err(|source| StorageError::Json {
            path: self.path.clone(),
            source,
        })?;
        atomic_write(&self.path, &json)
    }
}

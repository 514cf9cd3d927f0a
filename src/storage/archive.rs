//! Archived-object file
//!
//! Layout: 4-byte magic, little-endian u16 format version, then the
//! bincode-encoded string list.

use std::path::PathBuf;

use super::{FriendsStore, SourceKind, atomic_write, read_if_exists};
use crate::error::StorageError;

const MAGIC: &[u8; 4] = b"KARC";
const FORMAT_VERSION: u16 = 1;
const HEADER_LEN: usize = MAGIC.len() + 2;

/// Friends list archived as a binary file
#[derive(Debug, Clone)]
pub struct ArchiveFile {
    path: PathBuf,
}

impl ArchiveFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn encode(&self, friends: &[String]) -> Result<Vec<u8>, StorageError> {
        let body = bincode::serialize(friends).map_err(|source| StorageError::Archive {
            path: self.path.clone(),
            source,
        })?;
        let mut bytes = Vec::with_capacity(HEADER_LEN + body.len());
        bytes.extend_from_slice(MAGIC);
        bytes.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
        bytes.extend_from_slice(&body);
        Ok(bytes)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<String>, StorageError> {
        let bad = |reason: &str| StorageError::BadArchive {
            path: self.path.clone(),
            reason: reason.to_string(),
        };

        if bytes.len() < HEADER_LEN || &bytes[..MAGIC.len()] != MAGIC {
            return Err(bad("missing archive header"));
        }
        let version = u16::from_le_bytes([bytes[4], bytes[5]]);
        if version != FORMAT_VERSION {
            return Err(bad(&format!("unsupported format version {version}")));
        }

        bincode::deserialize(&bytes[HEADER_LEN..]).map_err(|source| StorageError::Archive {
            path: self.path.clone(),
            source,
        })
    }
}

impl FriendsStore for ArchiveFile {
    fn kind(&self) -> SourceKind {
        SourceKind::Archive
    }

    fn load(&self) -> Result<Option<Vec<String>>, StorageError> {
        match read_if_exists(&self.path)? {
            Some(bytes) => self.decode(&bytes).map(Some),
            None => Ok(None),
        }
    }

    fn save(&self, friends: &[String]) -> Result<(), StorageError> {
        let bytes = self.encode(friends)?;
        atomic_write(&self.path, &bytes)
    }
}

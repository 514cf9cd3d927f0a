//! Friends-list storage adapters
//!
//! Every adapter persists the same thing, a flat list of names:
//! - `archive`: binary archived-object file (`keyed`)
//! - `json_file`: JSON array file (`example.json`)
//! - `preferences`: one entry in a key-value preferences file

pub mod archive;
pub mod json_file;
pub mod preferences;

pub use archive::ArchiveFile;
pub use json_file::JsonFile;
pub use preferences::{Preferences, PreferencesEntry};

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// Which storage target a list came from or went to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Archive,
    Preferences,
    Json,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Archive => "archive",
            SourceKind::Preferences => "preferences",
            SourceKind::Json => "json",
        }
    }
}

/// One persisted copy of the friends list
pub trait FriendsStore {
    fn kind(&self) -> SourceKind;

    /// Stored list, or `None` when nothing has been saved yet
    fn load(&self) -> Result<Option<Vec<String>>, StorageError>;

    /// Replace the stored list
    fn save(&self, friends: &[String]) -> Result<(), StorageError>;
}

/// Read a file, mapping "not found" to `None`
pub(crate) fn read_if_exists(path: &Path) -> Result<Option<Vec<u8>>, StorageError> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(StorageError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Write through a sibling temp file and rename over the target
pub(crate) fn atomic_write(path: &Path, data: &[u8]) -> Result<(), StorageError> {
    let io_err = |source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);
    let written = fs::File::create(&tmp).and_then(|mut f| {
        f.write_all(data)?;
        f.sync_all()
    });
    if let Err(source) = written.and_then(|()| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(io_err(source));
    }
    Ok(())
}

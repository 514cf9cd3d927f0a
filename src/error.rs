//! Error types
//!
//! None of these reach the end user. Missing bundle is the only fatal case;
//! everything else degrades the display or is reported and logged.

use std::path::PathBuf;

use thiserror::Error;

/// Failures loading the bundled profile document
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("bundled document {path} could not be read: {source}")]
    MissingResource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("bundled document is malformed: {0}")]
    MalformedDocument(String),
}

/// Failures reading or writing one storage target
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("archive encoding error in {path}: {source}")]
    Archive {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },

    #[error("{path} is not a friends archive: {reason}")]
    BadArchive { path: PathBuf, reason: String },
}

/// Row lookups outside the list
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PresenterError {
    #[error("row {index} out of range (row count {len})")]
    OutOfRange { index: usize, len: usize },
}

/// Failures reading the settings file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

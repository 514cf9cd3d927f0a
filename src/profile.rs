//! Bundled profile document
//!
//! The document ships with the application and is read once per screen
//! activation. Only `friends` is ever overridden by persisted data.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::error::ProfileError;

/// Compiled-in copy of the bundled document
const EMBEDDED_DOCUMENT: &str = include_str!("../assets/example.json");

/// Where the bundled document is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bundle {
    /// Document compiled into the binary
    Embedded,
    /// `example.json` inside a resource directory
    Directory(PathBuf),
    /// Document text supplied directly
    Inline(String),
}

impl Bundle {
    /// Raw document text
    pub fn read(&self) -> Result<String, ProfileError> {
        match self {
            Bundle::Embedded => Ok(EMBEDDED_DOCUMENT.to_string()),
            Bundle::Inline(text) => Ok(text.clone()),
            Bundle::Directory(dir) => {
                let path = dir.join(consts::BUNDLE_RESOURCE);
                std::fs::read_to_string(&path)
                    .map_err(|source| ProfileError::MissingResource { path, source })
            }
        }
    }
}

/// Profile record parsed from the bundled document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(rename = "lastname")]
    pub last_name: String,
    pub friends: Vec<String>,
}

impl Profile {
    /// Strict decode: every field must be present and correctly typed
    pub fn from_json(text: &str) -> Result<Self, ProfileError> {
        serde_json::from_str(text).map_err(|e| ProfileError::MalformedDocument(e.to_string()))
    }

    /// Text shown above the list
    pub fn header_text(&self) -> String {
        header_text(&self.name, &self.last_name)
    }
}

fn header_text(name: &str, last_name: &str) -> String {
    format!("name: {name}\nlast name: {last_name}")
}

/// Result of reading the bundled document for a screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseProfile {
    Complete(Profile),
    /// Document failed the strict decode; whatever fields are still
    /// well-typed are kept
    Degraded {
        header: Option<String>,
        friends: Option<Vec<String>>,
    },
}

/// Read and strictly decode the bundled document
pub fn load_base_profile(bundle: &Bundle) -> Result<Profile, ProfileError> {
    Profile::from_json(&bundle.read()?)
}

/// Like [`load_base_profile`], but a malformed document degrades instead of failing.
///
/// A missing document is still an error: the screen cannot start without it.
pub fn load_base_profile_or_degrade(bundle: &Bundle) -> Result<BaseProfile, ProfileError> {
    let text = bundle.read()?;
    match Profile::from_json(&text) {
        Ok(profile) => Ok(BaseProfile::Complete(profile)),
        Err(e) => {
            let degraded = lenient_decode(&text);
            if let BaseProfile::Degraded { header: None, .. } = &degraded {
                log::warn!("{e}; continuing without profile header");
            } else {
                log::warn!("{e}; keeping the fields that are still readable");
            }
            Ok(degraded)
        }
    }
}

/// Field-by-field read of a document that failed the strict decode
fn lenient_decode(text: &str) -> BaseProfile {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(text) else {
        return BaseProfile::Degraded {
            header: None,
            friends: None,
        };
    };
    let field = |key: &str| value.get(key).and_then(serde_json::Value::as_str);

    let header = match (field(consts::KEY_NAME), field(consts::KEY_LASTNAME)) {
        (Some(name), Some(last_name)) => Some(header_text(name, last_name)),
        _ => None,
    };
    let friends = value
        .get(consts::KEY_FRIENDS)
        .and_then(|friends| serde_json::from_value(friends.clone()).ok());

    BaseProfile::Degraded { header, friends }
}

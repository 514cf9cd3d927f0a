//! JSON Example - a single-screen friends list
//!
//! Core modules:
//! - `profile`: Bundled profile document (name, last name, default friends)
//! - `storage`: Friends-list storage adapters (archive, JSON file, preferences)
//! - `repository`: Ordered load and fan-out save over the adapters
//! - `store`: In-memory profile owned by the screen
//! - `presenter`: List rows and the add-friend prompt
//! - `screen`: Wires store, presenter and a view together
//! - `config`: Paths, file names and source order

pub mod config;
pub mod error;
pub mod presenter;
pub mod profile;
pub mod repository;
pub mod screen;
pub mod storage;
pub mod store;

pub use config::Config;
pub use error::{ConfigError, PresenterError, ProfileError, StorageError};
pub use presenter::{ListPresenter, ListView, PromptResponse};
pub use profile::{Bundle, Profile};
pub use repository::{FriendsRepository, LoadOutcome, Provenance, SaveReport};
pub use screen::Screen;
pub use storage::{FriendsStore, SourceKind};
pub use store::{Command, ProfileStore};

/// Fixed resource names and keys
pub mod consts {
    /// Bundled document resource name
    pub const BUNDLE_RESOURCE: &str = "example.json";

    /// Bundled document keys
    pub const KEY_NAME: &str = "name";
    pub const KEY_LASTNAME: &str = "lastname";
    pub const KEY_FRIENDS: &str = "friends";

    /// Archived-object file in the documents directory
    pub const ARCHIVE_FILE: &str = "keyed";
    /// JSON friends file in the documents directory (not the bundled copy)
    pub const JSON_FILE: &str = "example.json";
    /// Preferences file in the documents directory
    pub const PREFERENCES_FILE: &str = "preferences.json";
    /// Preferences key, prefixed with the app domain to stay unique
    pub const PREFERENCES_KEY: &str = "me.jglievano.data";

    /// Add-friend prompt text
    pub const PROMPT_TITLE: &str = "New friend";
    pub const PROMPT_MESSAGE: &str = "Add a new friend";
}

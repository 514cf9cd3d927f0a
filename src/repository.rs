//! Friends repository
//!
//! Loads from the first source in a configurable order that yields a list,
//! and saves to every adapter. Saves never stop at the first failure and
//! never roll back; the returned report says which targets took the write.

use crate::config::Config;
use crate::error::StorageError;
use crate::storage::{ArchiveFile, FriendsStore, JsonFile, Preferences, SourceKind};

/// Where a loaded list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Stored(SourceKind),
    /// No persisted copy; the bundled document's list was used
    Bundled,
}

/// Loaded list plus its origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome<T = Vec<String>> {
    pub friends: T,
    pub provenance: Provenance,
}

/// Per-target outcome of one save
#[derive(Debug, Default)]
pub struct SaveReport {
    pub outcomes: Vec<(SourceKind, Result<(), StorageError>)>,
}

impl SaveReport {
    /// Targets that took the write
    pub fn succeeded(&self) -> Vec<SourceKind> {
        self.outcomes
            .iter()
            .filter(|(_, r)| r.is_ok())
            .map(|(kind, _)| *kind)
            .collect()
    }

    /// Targets that failed, with their errors
    pub fn failures(&self) -> Vec<(SourceKind, &StorageError)> {
        self.outcomes
            .iter()
            .filter_map(|(kind, r)| r.as_ref().err().map(|e| (*kind, e)))
            .collect()
    }

    /// True when every target was written
    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(|(_, r)| r.is_ok())
    }
}

/// Ordered sources over a set of storage adapters
pub struct FriendsRepository {
    /// Save fan-out order
    stores: Vec<Box<dyn FriendsStore>>,
    /// Load priority; kinds without a matching store are skipped
    load_order: Vec<SourceKind>,
}

impl FriendsRepository {
    pub fn new(stores: Vec<Box<dyn FriendsStore>>, load_order: Vec<SourceKind>) -> Self {
        Self { stores, load_order }
    }

    /// File-backed adapters at the configured locations
    pub fn from_config(config: &Config) -> Self {
        let preferences = Preferences::new(config.preferences_path());
        let stores: Vec<Box<dyn FriendsStore>> = vec![
            Box::new(ArchiveFile::new(config.archive_path())),
            Box::new(preferences.entry(config.preferences_key.clone())),
            Box::new(JsonFile::new(config.json_path())),
        ];
        Self::new(stores, config.load_order.clone())
    }

    fn store(&self, kind: SourceKind) -> Option<&dyn FriendsStore> {
        self.stores
            .iter()
            .find(|s| s.kind() == kind)
            .map(|s| &**s)
    }

    /// First list found in load order, else `fallback`.
    ///
    /// Absent and unreadable sources are both skipped; a stale earlier
    /// source still wins over a fresher later one.
    pub fn load<T>(&self, fallback: T) -> LoadOutcome<T>
    where
        T: From<Vec<String>>,
    {
        for &kind in &self.load_order {
            let Some(store) = self.store(kind) else {
                log::warn!("No {} store configured, skipping", kind.as_str());
                continue;
            };
            match store.load() {
                Ok(Some(friends)) => {
                    log::debug!("Loaded {} friends from {}", friends.len(), kind.as_str());
                    return LoadOutcome {
                        friends: T::from(friends),
                        provenance: Provenance::Stored(kind),
                    };
                }
                Ok(None) => log::debug!("No saved friends in {}", kind.as_str()),
                Err(e) => log::warn!("Skipping {}: {e}", kind.as_str()),
            }
        }

        log::debug!("Using bundled friends list");
        LoadOutcome {
            friends: fallback,
            provenance: Provenance::Bundled,
        }
    }

    /// Write `friends` to every store
    pub fn save(&self, friends: &[String]) -> SaveReport {
        let outcomes = self
            .stores
            .iter()
            .map(|store| {
                let result = store.save(friends);
                if let Err(e) = &result {
                    log::warn!("Failed to save friends to {}: {e}", store.kind().as_str());
                }
                (store.kind(), result)
            })
            .collect::<Vec<_>>();

        let report = SaveReport { outcomes };
        if report.is_complete() {
            log::info!("Friends saved ({} entries)", friends.len());
        }
        report
    }
}

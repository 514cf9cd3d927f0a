//! Profile store
//!
//! Owns the in-memory profile for one screen activation and every write
//! back to storage. Only the friends list outlives the screen.

use crate::error::ProfileError;
use crate::profile::{BaseProfile, Bundle, Profile, load_base_profile_or_degrade};
use crate::repository::{FriendsRepository, Provenance, SaveReport};

/// Mutations requested by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AppendFriend(String),
}

/// In-memory profile plus the repository behind it
pub struct ProfileStore {
    base: BaseProfile,
    provenance: Provenance,
    repository: FriendsRepository,
}

impl ProfileStore {
    /// Load the bundled profile, then overlay the highest-priority saved friends list.
    ///
    /// Fails only when the bundled document cannot be read.
    pub fn activate(bundle: &Bundle, repository: FriendsRepository) -> Result<Self, ProfileError> {
        let mut base = load_base_profile_or_degrade(bundle)?;

        let provenance = match &mut base {
            BaseProfile::Complete(profile) => {
                let outcome = repository.load(std::mem::take(&mut profile.friends));
                profile.friends = outcome.friends;
                outcome.provenance
            }
            BaseProfile::Degraded { friends, .. } => {
                let outcome = repository.load(friends.take());
                *friends = outcome.friends;
                outcome.provenance
            }
        };

        log::info!(
            "Profile loaded ({} friends, from {:?})",
            Self::list_len(&base),
            provenance
        );

        Ok(Self {
            base,
            provenance,
            repository,
        })
    }

    fn list_len(base: &BaseProfile) -> usize {
        match base {
            BaseProfile::Complete(profile) => profile.friends.len(),
            BaseProfile::Degraded { friends, .. } => friends.as_ref().map_or(0, Vec::len),
        }
    }

    /// Full profile, or `None` when the bundled document was malformed
    pub fn profile(&self) -> Option<&Profile> {
        match &self.base {
            BaseProfile::Complete(profile) => Some(profile),
            BaseProfile::Degraded { .. } => None,
        }
    }

    /// Header above the list, `None` when name or last name is unusable
    pub fn header_text(&self) -> Option<String> {
        match &self.base {
            BaseProfile::Complete(profile) => Some(profile.header_text()),
            BaseProfile::Degraded { header, .. } => header.clone(),
        }
    }

    /// Current friends list, `None` if it was never set
    pub fn friends(&self) -> Option<&[String]> {
        match &self.base {
            BaseProfile::Complete(profile) => Some(&profile.friends),
            BaseProfile::Degraded { friends, .. } => friends.as_deref(),
        }
    }

    fn friends_mut(&mut self) -> Option<&mut Vec<String>> {
        match &mut self.base {
            BaseProfile::Complete(profile) => Some(&mut profile.friends),
            BaseProfile::Degraded { friends, .. } => friends.as_mut(),
        }
    }

    /// Where the friends list came from at activation
    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    /// Apply one command from the presentation layer
    pub fn apply(&mut self, command: Command) -> Option<SaveReport> {
        match command {
            Command::AppendFriend(name) => self.append(name),
        }
    }

    /// Append a name and save the whole list.
    ///
    /// Any string is accepted, including the empty one. Returns `None` without
    /// writing when there is no friends list to append to.
    pub fn append(&mut self, name: String) -> Option<SaveReport> {
        let Some(friends) = self.friends_mut() else {
            log::warn!("No friends list loaded, ignoring new friend");
            return None;
        };
        friends.push(name);
        let snapshot = friends.clone();
        Some(self.save(&snapshot))
    }

    /// Write `friends` to every storage target
    pub fn save(&self, friends: &[String]) -> SaveReport {
        self.repository.save(friends)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::storage::SourceKind;
    use proptest::prelude::*;

    const ANA: &str = r#"{"name":"Ana","lastname":"Lopez","friends":["Beto"]}"#;

    fn activate(dir: &std::path::Path, doc: &str) -> ProfileStore {
        let config = Config::with_documents_dir(dir);
        ProfileStore::activate(
            &Bundle::Inline(doc.to_string()),
            FriendsRepository::from_config(&config),
        )
        .unwrap()
    }

    #[test]
    fn test_activate_without_saved_data() {
        let dir = tempfile::tempdir().unwrap();
        let store = activate(dir.path(), ANA);

        assert_eq!(store.friends(), Some(&["Beto".to_string()][..]));
        assert_eq!(store.provenance(), Provenance::Bundled);
        assert_eq!(
            store.header_text().as_deref(),
            Some("name: Ana\nlast name: Lopez")
        );
    }

    #[test]
    fn test_append_persists_for_next_activation() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = activate(dir.path(), ANA);

        let report = store.apply(Command::AppendFriend("Carla".to_string())).unwrap();
        assert!(report.is_complete());
        drop(store);

        let store = activate(dir.path(), ANA);
        assert_eq!(
            store.friends().unwrap(),
            &["Beto".to_string(), "Carla".to_string()]
        );
        assert_eq!(store.provenance(), Provenance::Stored(SourceKind::Archive));
    }

    #[test]
    fn test_empty_name_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = activate(dir.path(), ANA);
        store.append(String::new()).unwrap();
        assert_eq!(store.friends().unwrap().len(), 2);
        assert_eq!(store.friends().unwrap()[1], "");
    }

    #[test]
    fn test_degraded_document() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = activate(dir.path(), r#"{"friends":["Beto"]}"#);

        assert!(store.profile().is_none());
        assert!(store.header_text().is_none());
        assert_eq!(store.friends().unwrap().len(), 1);
        assert!(store.append("Carla".to_string()).is_some());
    }

    #[test]
    fn test_unset_friends_skips_write() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = activate(dir.path(), r#"{"name":"Ana"}"#);

        assert!(store.friends().is_none());
        assert!(store.append("Carla".to_string()).is_none());
        assert!(!dir.path().join("keyed").exists());
    }

    #[test]
    fn test_degraded_document_still_reads_saved_list() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = activate(dir.path(), ANA);
        store.append("Carla".to_string());

        let store = activate(dir.path(), r#"{"name":"Ana"}"#);
        assert_eq!(store.friends().unwrap().len(), 2);
    }

    #[test]
    fn test_header_survives_missing_friends_field() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = activate(dir.path(), ANA);
        store.append("Carla".to_string());

        let store = activate(dir.path(), r#"{"name":"Ana","lastname":"Lopez"}"#);
        assert!(store.profile().is_none());
        assert_eq!(
            store.header_text().as_deref(),
            Some("name: Ana\nlast name: Lopez")
        );
        assert_eq!(
            store.friends().unwrap(),
            &["Beto".to_string(), "Carla".to_string()]
        );
        assert_eq!(store.provenance(), Provenance::Stored(SourceKind::Archive));
    }

    #[test]
    fn test_missing_bundle_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::with_documents_dir(dir.path());
        let result = ProfileStore::activate(
            &Bundle::Directory(dir.path().join("no-such-bundle")),
            FriendsRepository::from_config(&config),
        );
        assert!(matches!(result, Err(ProfileError::MissingResource { .. })));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn prop_appends_grow_list(names in proptest::collection::vec(".{0,12}", 0..6)) {
            let dir = tempfile::tempdir().unwrap();
            let mut store = activate(dir.path(), ANA);
            let initial = store.friends().unwrap().len();

            for name in &names {
                store.append(name.clone());
            }

            let friends = store.friends().unwrap();
            prop_assert_eq!(friends.len(), initial + names.len());
            prop_assert_eq!(&friends[initial..], &names[..]);
        }
    }
}

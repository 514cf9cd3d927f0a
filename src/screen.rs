//! Friends screen controller
//!
//! Activation loads the store; prompt answers become commands for the store,
//! and every handled command is followed by a full re-render.

use crate::config::Config;
use crate::error::ProfileError;
use crate::presenter::{ListPresenter, ListView, PromptResponse};
use crate::repository::{FriendsRepository, SaveReport};
use crate::store::ProfileStore;

pub struct Screen {
    store: ProfileStore,
}

impl Screen {
    /// Load the profile and friends list for the configured locations
    pub fn activate(config: &Config) -> Result<Self, ProfileError> {
        let store = ProfileStore::activate(&config.bundle(), FriendsRepository::from_config(config))?;
        Ok(Self { store })
    }

    pub fn from_store(store: ProfileStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ProfileStore {
        &self.store
    }

    pub fn presenter(&self) -> ListPresenter<'_> {
        ListPresenter::new(self.store.friends())
    }

    /// Draw header and rows
    pub fn render(&self, view: &mut impl ListView) {
        let header = self.store.header_text();
        view.show_header(header.as_deref());
        view.reload(self.presenter().rows());
    }

    /// Handle an add-friend prompt answer
    pub fn handle(&mut self, response: PromptResponse, view: &mut impl ListView) -> Option<SaveReport> {
        let command = ListPresenter::on_add_requested(response)?;
        let report = self.store.apply(command);
        self.render(view);
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Bundle;

    #[derive(Default)]
    struct RecordingView {
        header: Option<String>,
        rows: Vec<String>,
        reloads: usize,
    }

    impl ListView for RecordingView {
        fn show_header(&mut self, text: Option<&str>) {
            self.header = text.map(str::to_string);
        }

        fn reload(&mut self, rows: &[String]) {
            self.rows = rows.to_vec();
            self.reloads += 1;
        }
    }

    fn screen(dir: &std::path::Path) -> Screen {
        let config = Config::with_documents_dir(dir);
        let store = ProfileStore::activate(
            &Bundle::Inline(r#"{"name":"Ana","lastname":"Lopez","friends":["Beto"]}"#.to_string()),
            FriendsRepository::from_config(&config),
        )
        .unwrap();
        Screen::from_store(store)
    }

    #[test]
    fn test_render() {
        let dir = tempfile::tempdir().unwrap();
        let screen = screen(dir.path());
        let mut view = RecordingView::default();

        screen.render(&mut view);
        assert_eq!(view.header.as_deref(), Some("name: Ana\nlast name: Lopez"));
        assert_eq!(view.rows, vec!["Beto".to_string()]);
    }

    #[test]
    fn test_save_appends_and_rerenders() {
        let dir = tempfile::tempdir().unwrap();
        let mut screen = screen(dir.path());
        let mut view = RecordingView::default();

        let report = screen.handle(PromptResponse::Save("Carla".to_string()), &mut view);
        assert!(report.unwrap().is_complete());
        assert_eq!(view.reloads, 1);
        assert_eq!(view.rows, vec!["Beto".to_string(), "Carla".to_string()]);
        assert_eq!(screen.presenter().row_content(1), Ok("Carla"));
    }

    #[test]
    fn test_cancel_does_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut screen = screen(dir.path());
        let mut view = RecordingView::default();

        assert!(screen.handle(PromptResponse::Cancel, &mut view).is_none());
        assert_eq!(view.reloads, 0);
        assert_eq!(screen.presenter().row_count(), 1);
        assert!(!dir.path().join("keyed").exists());
    }

    #[test]
    fn test_activate_with_embedded_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let screen = Screen::activate(&Config::with_documents_dir(dir.path())).unwrap();
        assert!(screen.store().header_text().is_some());
        assert!(screen.presenter().row_count() > 0);
    }
}

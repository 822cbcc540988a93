use std::path::PathBuf;

use color_eyre::eyre::Result;
use tracing::info;

use crate::models::{DuplicatePair, MediaEntry, SortKey, SortOrder, filter_entries, sort_entries};

use super::Session;

/// One user action of the media browser. Widget concerns (selection state,
/// icon sizes, theming) stay outside; every variant maps to a pure state
/// transition plus filesystem side effects in `core`.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Select a folder and rebuild the index.
    Open(PathBuf),
    /// Return to the previously opened folder.
    Back,
    /// Re-emit the loaded entry list.
    List,
    /// Case-insensitive substring search over the loaded entries.
    Search(String),
    /// Drop the search and show the full list again.
    ClearSearch,
    /// Reorder the entry list.
    Sort(SortKey, SortOrder),
    /// Pair perceptually identical images among the loaded entries.
    FindDuplicates,
    /// Move the given files into the recycle bin.
    Delete(Vec<PathBuf>),
    /// Restore everything deleted since the last undo.
    Undo,
}

/// What an applied action produced, for the caller to present.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Listed(Vec<MediaEntry>),
    Duplicates(Vec<DuplicatePair>),
    Deleted(usize),
    Restored(usize),
}

impl Session {
    /// Applies one action to the session, mutating its state and returning
    /// what changed.
    ///
    /// # Errors
    ///
    /// Returns an error only for delete/undo move failures; scan and search
    /// problems degrade to empty results.
    pub async fn apply(&mut self, action: Action) -> Result<Outcome> {
        match action {
            Action::Open(path) => Ok(Outcome::Listed(self.open_folder(path))),
            Action::Back => Ok(Outcome::Listed(self.go_back())),
            Action::List | Action::ClearSearch => Ok(Outcome::Listed(self.entries.clone())),
            Action::Search(query) => Ok(Outcome::Listed(filter_entries(&self.entries, &query))),
            Action::Sort(key, order) => {
                self.sort = Some((key, order));
                sort_entries(&mut self.entries, key, order);
                Ok(Outcome::Listed(self.entries.clone()))
            }
            Action::FindDuplicates => Ok(Outcome::Duplicates(self.finder.find(&self.entries))),
            Action::Delete(paths) => {
                let deleted = self.recycle.delete(paths).await?;
                self.rescan();
                Ok(Outcome::Deleted(deleted))
            }
            Action::Undo => {
                let restored = self.recycle.undo().await?;
                self.rescan();
                Ok(Outcome::Restored(restored))
            }
        }
    }

    fn open_folder(&mut self, path: PathBuf) -> Vec<MediaEntry> {
        info!("opening folder {}", path.display());
        if let Some(previous) = self.current_folder.replace(path.clone()) {
            if previous != path {
                self.history.push(previous);
            }
        }
        self.rescan();
        self.entries.clone()
    }

    fn go_back(&mut self) -> Vec<MediaEntry> {
        if let Some(previous) = self.history.pop() {
            info!("going back to {}", previous.display());
            self.current_folder = Some(previous);
            self.rescan();
        }
        self.entries.clone()
    }

    /// Rebuilds the entry list from the current folder, keeping the active
    /// sort applied.
    fn rescan(&mut self) {
        self.entries = match &self.current_folder {
            Some(folder) => self.scanner.scan_directory(folder),
            None => Vec::new(),
        };
        if let Some((key, order)) = self.sort {
            sort_entries(&mut self.entries, key, order);
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::config::Settings;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"data").unwrap();
    }

    fn session_in(temp: &TempDir) -> Session {
        Session::new(Settings {
            source_folder: None,
            recycle_dir: temp.path().join(".recycle_bin"),
        })
    }

    #[tokio::test]
    async fn open_loads_the_folder() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a.jpg");
        touch(temp.path(), "b.mp4");
        touch(temp.path(), "notes.txt");

        let mut session = session_in(&temp);
        let outcome = session.apply(Action::Open(temp.path().to_path_buf())).await.unwrap();

        match outcome {
            Outcome::Listed(entries) => assert_eq!(entries.len(), 2),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(session.current_folder.as_deref(), Some(temp.path()));
    }

    #[tokio::test]
    async fn back_returns_to_the_previous_folder() {
        let temp = TempDir::new().unwrap();
        let one = temp.path().join("one");
        let two = temp.path().join("two");
        fs::create_dir_all(&one).unwrap();
        fs::create_dir_all(&two).unwrap();
        touch(&one, "only_here.jpg");

        let mut session = session_in(&temp);
        session.apply(Action::Open(one.clone())).await.unwrap();
        session.apply(Action::Open(two.clone())).await.unwrap();
        assert!(session.entries.is_empty());

        session.apply(Action::Back).await.unwrap();
        assert_eq!(session.current_folder.as_deref(), Some(one.as_path()));
        assert_eq!(session.entries.len(), 1);
    }

    #[tokio::test]
    async fn back_without_history_keeps_the_current_folder() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a.jpg");

        let mut session = session_in(&temp);
        session.apply(Action::Open(temp.path().to_path_buf())).await.unwrap();
        session.apply(Action::Back).await.unwrap();

        assert_eq!(session.current_folder.as_deref(), Some(temp.path()));
        assert_eq!(session.entries.len(), 1);
    }

    #[tokio::test]
    async fn search_is_a_view_over_loaded_entries() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "beach.jpg");
        touch(temp.path(), "city.jpg");

        let mut session = session_in(&temp);
        session.apply(Action::Open(temp.path().to_path_buf())).await.unwrap();

        let outcome = session.apply(Action::Search("BEA".to_string())).await.unwrap();
        match outcome {
            Outcome::Listed(hits) => {
                assert_eq!(hits.len(), 1);
                assert_eq!(hits[0].name, "beach.jpg");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        // the loaded list is untouched
        assert_eq!(session.entries.len(), 2);
    }

    #[tokio::test]
    async fn sort_persists_across_rescans() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "b.jpg");
        touch(temp.path(), "a.jpg");
        touch(temp.path(), "c.jpg");

        let mut session = session_in(&temp);
        session.apply(Action::Open(temp.path().to_path_buf())).await.unwrap();
        session
            .apply(Action::Sort(SortKey::Name, SortOrder::Descending))
            .await
            .unwrap();

        let doomed = temp.path().join("c.jpg");
        session.apply(Action::Delete(vec![doomed])).await.unwrap();

        let names: Vec<_> = session.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["b.jpg", "a.jpg"]);
    }

    #[tokio::test]
    async fn delete_then_undo_restores_the_listing() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a.jpg");
        touch(temp.path(), "b.jpg");

        let mut session = session_in(&temp);
        session.apply(Action::Open(temp.path().to_path_buf())).await.unwrap();

        let outcome = session
            .apply(Action::Delete(vec![temp.path().join("a.jpg")]))
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Deleted(1));
        assert_eq!(session.entries.len(), 1);
        assert_eq!(session.recycle.pending(), 1);

        let outcome = session.apply(Action::Undo).await.unwrap();
        assert_eq!(outcome, Outcome::Restored(1));
        assert_eq!(session.entries.len(), 2);
        assert!(session.recycle.is_empty());
    }
}

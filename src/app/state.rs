use std::path::PathBuf;

use crate::config::Settings;
use crate::core::{AverageHasher, DuplicateFinder, Fingerprinter, RecycleBin, Scanner};
use crate::models::{MediaEntry, SortKey, SortOrder};

/// Everything the original program kept in global UI state, as one explicit
/// object: the opened folder, the loaded entry list, the active sort, the
/// folder history and the recycle-bin ledger. Mutated only through
/// [`Session::apply`](crate::app::Session::apply).
pub struct Session {
    pub settings: Settings,
    pub current_folder: Option<PathBuf>,
    pub entries: Vec<MediaEntry>,
    pub sort: Option<(SortKey, SortOrder)>,
    pub recycle: RecycleBin,
    pub(crate) history: Vec<PathBuf>,
    pub(crate) scanner: Scanner,
    pub(crate) finder: DuplicateFinder<Box<dyn Fingerprinter>>,
}

impl Session {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self::with_fingerprinter(settings, Box::new(AverageHasher::new()))
    }

    /// Builds a session around a custom fingerprinting capability; used by
    /// tests and callers that bring their own decoder.
    #[must_use]
    pub fn with_fingerprinter(settings: Settings, fingerprinter: Box<dyn Fingerprinter>) -> Self {
        let recycle = RecycleBin::new(settings.recycle_dir.clone());
        Self {
            settings,
            current_folder: None,
            entries: Vec::new(),
            sort: None,
            recycle,
            history: Vec::new(),
            scanner: Scanner::new(),
            finder: DuplicateFinder::new(fingerprinter),
        }
    }
}

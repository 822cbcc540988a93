use std::path::PathBuf;

use ahash::AHashMap;
use tracing::{debug, warn};

use crate::core::Fingerprinter;
use crate::models::{DuplicatePair, Fingerprint, MediaEntry};

pub struct DuplicateFinder<F> {
    fingerprinter: F,
}

impl<F: Fingerprinter> DuplicateFinder<F> {
    pub fn new(fingerprinter: F) -> Self {
        Self { fingerprinter }
    }

    /// Pairs every image whose fingerprint was already seen with the first
    /// file that produced it, in one pass over the entries.
    ///
    /// Videos are never fingerprinted. Images that fail to decode are
    /// skipped with a warning and cannot appear in any pair.
    pub fn find(&self, entries: &[MediaEntry]) -> Vec<DuplicatePair> {
        let mut first_seen: AHashMap<Fingerprint, PathBuf> = AHashMap::new();
        let mut pairs = Vec::new();

        for entry in entries.iter().filter(|e| e.is_image()) {
            let fingerprint = match self.fingerprinter.fingerprint(&entry.path) {
                Ok(fingerprint) => fingerprint,
                Err(e) => {
                    warn!("skipping {}: {e}", entry.path.display());
                    continue;
                }
            };

            match first_seen.get(&fingerprint) {
                Some(first) => pairs.push(DuplicatePair {
                    first_seen: first.clone(),
                    duplicate: entry.path.clone(),
                    fingerprint,
                }),
                None => {
                    first_seen.insert(fingerprint, entry.path.clone());
                }
            }
        }

        debug!(
            "duplicate finder: {} pairs across {} distinct fingerprints",
            pairs.len(),
            first_seen.len()
        );
        pairs
    }
}

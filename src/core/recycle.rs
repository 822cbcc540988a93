use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;
use tracing::info;

#[derive(Debug, Error)]
pub enum RecycleError {
    #[error("failed to create recycle directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to move {path}: {source}")]
    Move {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One reversible delete: where the file lived and where it sits now. The
/// ledger holds the only knowledge of this mapping, so the recycled file
/// must stay in place until undone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub original: PathBuf,
    pub recycled: PathBuf,
}

/// Moves deleted files into a recycle directory and records each move in an
/// ordered ledger. Undo is all-or-nothing: it restores everything recorded
/// since the last undo and clears the ledger.
#[derive(Debug)]
pub struct RecycleBin {
    directory: PathBuf,
    ledger: Vec<LedgerEntry>,
}

impl RecycleBin {
    #[must_use]
    pub fn new(directory: PathBuf) -> Self {
        Self {
            directory,
            ledger: Vec::new(),
        }
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Number of deletes recorded since the last undo.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.ledger.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }

    #[must_use]
    pub fn ledger(&self) -> &[LedgerEntry] {
        &self.ledger
    }

    /// Moves each file into the recycle directory, creating it on first use,
    /// and appends one ledger entry per file. Consecutive calls accumulate
    /// entries until the next [`undo`](Self::undo).
    ///
    /// # Errors
    ///
    /// Returns an error if the recycle directory cannot be created or a move
    /// fails; files already moved stay recorded in the ledger.
    pub async fn delete<I>(&mut self, paths: I) -> Result<usize, RecycleError>
    where
        I: IntoIterator<Item = PathBuf>,
    {
        fs::create_dir_all(&self.directory)
            .await
            .map_err(|e| RecycleError::CreateDir {
                path: self.directory.clone(),
                source: e,
            })?;

        let mut moved = 0;
        for original in paths {
            let recycled = self.unique_destination(&original).await;
            fs::rename(&original, &recycled)
                .await
                .map_err(|e| RecycleError::Move {
                    path: original.clone(),
                    source: e,
                })?;
            info!("recycled {} -> {}", original.display(), recycled.display());
            self.ledger.push(LedgerEntry { original, recycled });
            moved += 1;
        }
        Ok(moved)
    }

    /// Restores every recorded file to its original path, newest first, then
    /// clears the ledger.
    ///
    /// # Errors
    ///
    /// Returns an error if a move back fails; the failed entry and anything
    /// older stay in the ledger.
    pub async fn undo(&mut self) -> Result<usize, RecycleError> {
        let mut restored = 0;
        while let Some(entry) = self.ledger.last().cloned() {
            fs::rename(&entry.recycled, &entry.original)
                .await
                .map_err(|e| RecycleError::Move {
                    path: entry.recycled.clone(),
                    source: e,
                })?;
            info!("restored {}", entry.original.display());
            self.ledger.pop();
            restored += 1;
        }
        Ok(restored)
    }

    /// Picks a destination that keeps the original base name, suffixing
    /// `-1`, `-2`, ... when an earlier delete already holds the name. Two
    /// folders both containing a `photo.jpg` must not overwrite each other
    /// in the bin.
    async fn unique_destination(&self, original: &Path) -> PathBuf {
        let name = original
            .file_name()
            .map_or_else(|| "unnamed".into(), std::ffi::OsStr::to_os_string);
        let candidate = self.directory.join(&name);
        if !fs::try_exists(&candidate).await.unwrap_or(false) {
            return candidate;
        }

        let stem = original.file_stem().and_then(|s| s.to_str()).unwrap_or("unnamed");
        let extension = original.extension().and_then(|e| e.to_str());
        let mut n = 1u32;
        loop {
            let candidate = match extension {
                Some(ext) => self.directory.join(format!("{stem}-{n}.{ext}")),
                None => self.directory.join(format!("{stem}-{n}")),
            };
            if !fs::try_exists(&candidate).await.unwrap_or(false) {
                return candidate;
            }
            n += 1;
        }
    }
}

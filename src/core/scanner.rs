use std::path::Path;

use chrono::Local;
use tracing::{debug, warn};

use crate::models::MediaEntry;
use crate::utils::{MEDIA_EXTENSIONS, kind_for_extension, system_time_to_local};

#[derive(Debug, Clone, Copy, Default)]
pub struct Scanner;

impl Scanner {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Lists the media files directly inside `path`, in directory order.
    ///
    /// Only regular files count: subdirectories are skipped and symlinks are
    /// dropped because the entry file type is taken without following links.
    /// A missing or unreadable directory yields an empty list rather than an
    /// error.
    #[must_use]
    pub fn scan_directory(&self, path: &Path) -> Vec<MediaEntry> {
        let read_dir = match std::fs::read_dir(path) {
            Ok(read_dir) => read_dir,
            Err(e) => {
                warn!("Scanner: cannot read {}: {}", path.display(), e);
                return Vec::new();
            }
        };

        let files: Vec<MediaEntry> = read_dir
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().ok().is_some_and(|ft| ft.is_file()))
            .filter(|e| {
                e.file_name()
                    .to_str()
                    .is_some_and(|name| MEDIA_EXTENSIONS.is_match(name))
            })
            .filter_map(|e| Self::entry_for(&e.path()))
            .collect();

        debug!("Scanner: found {} media files in {}", files.len(), path.display());
        files
    }

    fn entry_for(path: &Path) -> Option<MediaEntry> {
        let extension = path.extension().and_then(|e| e.to_str())?.to_lowercase();
        let kind = kind_for_extension(&extension)?;
        let name = path.file_name().and_then(|n| n.to_str())?.to_string();
        let modified = std::fs::metadata(path)
            .ok()
            .and_then(|m| system_time_to_local(m.modified()))
            .unwrap_or_else(Local::now);

        Some(MediaEntry {
            path: path.to_path_buf(),
            name,
            extension,
            kind,
            modified,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::models::MediaKind;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"data").unwrap();
        path
    }

    #[test]
    fn finds_supported_files_only() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        touch(root, "beach.jpg");
        touch(root, "sunset.JPEG");
        touch(root, "icon.png");
        touch(root, "clip.mp4");
        touch(root, "slow.mov");
        touch(root, "old.avi");
        touch(root, "notes.txt");
        touch(root, "animation.gif");
        touch(root, "noextension");
        fs::create_dir(root.join("album.jpg")).unwrap(); // directory, not a file

        let entries = Scanner::new().scan_directory(root);
        assert_eq!(entries.len(), 6);

        let images = entries.iter().filter(|e| e.kind == MediaKind::Image).count();
        let videos = entries.iter().filter(|e| e.kind == MediaKind::Video).count();
        assert_eq!(images, 3);
        assert_eq!(videos, 3);
    }

    #[test]
    fn extension_is_lowercased_on_the_entry() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "SHOUTY.JPG");

        let entries = Scanner::new().scan_directory(temp.path());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].extension, "jpg");
        assert_eq!(entries[0].name, "SHOUTY.JPG");
    }

    #[test]
    fn dotfiles_with_supported_extensions_are_included() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), ".secret.jpg");
        touch(temp.path(), ".hidden");

        let entries = Scanner::new().scan_directory(temp.path());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, ".secret.jpg");
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_excluded() {
        let temp = TempDir::new().unwrap();
        let target = touch(temp.path(), "real.jpg");
        std::os::unix::fs::symlink(&target, temp.path().join("link.jpg")).unwrap();

        let entries = Scanner::new().scan_directory(temp.path());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path, target);
    }

    #[test]
    fn missing_directory_yields_empty_list() {
        let entries = Scanner::new().scan_directory(Path::new("/no/such/folder/anywhere"));
        assert!(entries.is_empty());
    }

    #[test]
    fn does_not_recurse_into_subdirectories() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("nested");
        fs::create_dir(&nested).unwrap();
        touch(&nested, "deep.jpg");
        touch(temp.path(), "top.jpg");

        let entries = Scanner::new().scan_directory(temp.path());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "top.jpg");
    }
}

use regex::RegexSet;

use crate::models::MediaKind;

#[allow(clippy::expect_used)]
pub static MEDIA_EXTENSIONS: std::sync::LazyLock<RegexSet> = std::sync::LazyLock::new(|| {
    RegexSet::new([r"(?i)\.(jpg|jpeg|png)$", r"(?i)\.(mp4|mov|avi)$"])
        .expect("Failed to compile media extensions regex patterns")
});

/// Classifies a lowercased extension; `None` means the file is not media we
/// display.
#[must_use]
pub fn kind_for_extension(extension: &str) -> Option<MediaKind> {
    match extension {
        "jpg" | "jpeg" | "png" => Some(MediaKind::Image),
        "mp4" | "mov" | "avi" => Some(MediaKind::Video),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_supported_extensions() {
        for ext in ["jpg", "jpeg", "png"] {
            assert_eq!(kind_for_extension(ext), Some(MediaKind::Image), "extension '{ext}'");
        }
        for ext in ["mp4", "mov", "avi"] {
            assert_eq!(kind_for_extension(ext), Some(MediaKind::Video), "extension '{ext}'");
        }
    }

    #[test]
    fn rejects_everything_else() {
        for ext in ["gif", "bmp", "mkv", "txt", "pdf", "", "jpg ", ".jpg", "jpgg"] {
            assert_eq!(kind_for_extension(ext), None, "extension '{ext}'");
        }
    }

    #[test]
    fn extension_regex_is_case_insensitive() {
        let cases = [
            ("photo.jpg", true),
            ("PHOTO.JPG", true),
            ("clip.MoV", true),
            ("archive.zip", false),
            ("animation.gif", false),
            ("noextension", false),
            ("", false),
        ];
        for (name, expected) in cases {
            assert_eq!(MEDIA_EXTENSIONS.is_match(name), expected, "filename '{name}'");
        }
    }
}

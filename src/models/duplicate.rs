use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Perceptual fingerprint of an image. Visually similar images (per the
/// average-hash algorithm) produce identical values; equality is exact, no
/// distance metric is involved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(String);

impl Fingerprint {
    #[must_use]
    pub fn new(value: String) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A later occurrence paired with the first file seen carrying the same
/// fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicatePair {
    pub first_seen: PathBuf,
    pub duplicate: PathBuf,
    pub fingerprint: Fingerprint,
}

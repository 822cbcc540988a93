use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use image_hasher::{HashAlg, Hasher, HasherConfig};

use crate::models::Fingerprint;

/// Capability seam for perceptual fingerprinting, so the duplicate finder
/// carries no dependency on a particular decoding library.
pub trait Fingerprinter {
    /// Computes the perceptual fingerprint of the image at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded as an image.
    fn fingerprint(&self, path: &Path) -> Result<Fingerprint>;
}

impl<T: Fingerprinter + ?Sized> Fingerprinter for Box<T> {
    fn fingerprint(&self, path: &Path) -> Result<Fingerprint> {
        (**self).fingerprint(path)
    }
}

/// Average-hash fingerprinter: downsample the image, compare each pixel
/// against the mean brightness, encode the bit string as base64. Robust to
/// recompression and resizing, deliberately not a cryptographic hash.
pub struct AverageHasher {
    hasher: Hasher,
}

impl AverageHasher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            hasher: HasherConfig::new().hash_alg(HashAlg::Mean).to_hasher(),
        }
    }
}

impl Default for AverageHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fingerprinter for AverageHasher {
    fn fingerprint(&self, path: &Path) -> Result<Fingerprint> {
        let img = image::open(path).wrap_err_with(|| format!("failed to decode {}", path.display()))?;
        Ok(Fingerprint::new(self.hasher.hash_image(&img).to_base64()))
    }
}

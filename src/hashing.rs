use std::path::Path;

use sha1::{Digest, Sha1};

use crate::error::KeyError;

/// Computes the SHA-1 hash of a file's raw byte content.
///
/// # Arguments
///
/// * `path` - Path to the file to hash
///
/// # Returns
///
/// A lowercase hex-encoded string of the file's SHA-1 hash.
///
/// # Errors
///
/// Returns an error if the file cannot be read. Manifest files are small,
/// so the whole content is read into memory in one shot.
pub fn hash_file(path: &Path) -> Result<String, KeyError> {
    let bytes = std::fs::read(path).map_err(|source| KeyError::IoError {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(hex::encode(Sha1::digest(&bytes)))
}

/// Computes the SHA-1 hash of a text block.
///
/// Used for the final fingerprint over the assembled status block.
pub fn hash_text(text: &str) -> String {
    hex::encode(Sha1::digest(text.as_bytes()))
}

//! SHA-256 hashing for header commitments.

use sha2::{Digest, Sha256};

/// Output size of [`tmhash`] in bytes.
pub const TMHASH_SIZE: usize = 32;

/// Compute the SHA-256 hash of arbitrary data.
pub fn tmhash(data: &[u8]) -> [u8; TMHASH_SIZE] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

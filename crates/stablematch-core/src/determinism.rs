//! Determinism verification for matcher runs.
//!
//! Rankings are strict, so the same instance always yields the same
//! matching. The `matching_root` is a SHA-256 commitment to a matching that
//! lets two runs (or two machines) be compared without shipping the full
//! mapping.

use sha2::{Digest, Sha256};
use stablematch_types::{Matching, constants};

/// Compute the root hash of a matching.
///
/// `SHA-256(domain_sep || len || for each pair in proposer order: proposer || reviewer)`
#[must_use]
pub fn compute_matching_root(matching: &Matching) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(constants::MATCHING_ROOT_DOMAIN);
    hasher.update((matching.len() as u64).to_le_bytes());

    for (proposer, reviewer) in matching.iter() {
        hasher.update(proposer.0.to_le_bytes());
        hasher.update(reviewer.0.to_le_bytes());
    }

    let result = hasher.finalize();
    let mut root = [0u8; 32];
    root.copy_from_slice(&result);
    root
}

/// Verify that `expected_root` commits to `matching`.
#[must_use]
pub fn verify_matching_root(matching: &Matching, expected_root: &[u8; 32]) -> bool {
    compute_matching_root(matching) == *expected_root
}

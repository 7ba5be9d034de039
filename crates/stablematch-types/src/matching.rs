//! The matcher's output.
//!
//! A [`Matching`] maps each proposer to its reviewer. At termination it is
//! total and a bijection, so the inverse is always derivable. A
//! [`MatchReport`] wraps it with run statistics and the deterministic
//! matching root.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{ProposerId, ReviewerId};

/// Proposer → reviewer assignment, ordered by proposer identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Matching {
    pairs: BTreeMap<ProposerId, ReviewerId>,
}

impl Matching {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The reviewer assigned to `proposer`.
    #[must_use]
    pub fn reviewer_of(&self, proposer: ProposerId) -> Option<ReviewerId> {
        self.pairs.get(&proposer).copied()
    }

    /// The proposer assigned to `reviewer` (linear scan; use [`inverse`]
    /// for repeated lookups).
    ///
    /// [`inverse`]: Self::inverse
    #[must_use]
    pub fn proposer_of(&self, reviewer: ReviewerId) -> Option<ProposerId> {
        self.pairs
            .iter()
            .find_map(|(&p, &r)| (r == reviewer).then_some(p))
    }

    /// Reviewer → proposer view of the same assignment.
    #[must_use]
    pub fn inverse(&self) -> BTreeMap<ReviewerId, ProposerId> {
        self.pairs.iter().map(|(&p, &r)| (r, p)).collect()
    }

    /// Pairs in proposer order.
    pub fn iter(&self) -> impl Iterator<Item = (ProposerId, ReviewerId)> + '_ {
        self.pairs.iter().map(|(&p, &r)| (p, r))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Plain `(proposer, reviewer)` integer pairs, handy for assertions.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(u32, u32)> {
        self.iter().map(|(p, r)| (p.0, r.0)).collect()
    }
}

impl FromIterator<(ProposerId, ReviewerId)> for Matching {
    fn from_iter<I: IntoIterator<Item = (ProposerId, ReviewerId)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

/// Result of one matcher run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    /// Number of participants per side.
    pub n: usize,
    /// The stable matching.
    pub matching: Matching,
    /// Proposal steps taken (never exceeds `n * n`).
    pub proposals: usize,
    /// Proposals that ended with the proposer free: refused outright or
    /// later displaced by a preferred proposer.
    pub rejections: usize,
    /// SHA-256 commitment to `matching` for cross-run comparison.
    pub matching_root: [u8; 32],
}

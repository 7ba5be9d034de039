//! Problem input: the two participant sets and their preference lists.
//!
//! Records are plain data supplied by a caller (literal construction, a
//! JSON document, a generator). Nothing here is validated; the matcher
//! checks every precondition before it runs.

use serde::{Deserialize, Serialize};

use crate::{ProposerId, ReviewerId};

/// A proposer and its ranking of every reviewer, most preferred first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposer {
    pub id: ProposerId,
    pub preferences: Vec<ReviewerId>,
}

impl Proposer {
    #[must_use]
    pub fn new(id: u32, preferences: &[u32]) -> Self {
        Self {
            id: ProposerId(id),
            preferences: preferences.iter().copied().map(ReviewerId).collect(),
        }
    }
}

/// A reviewer and its ranking of every proposer, most preferred first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reviewer {
    pub id: ReviewerId,
    pub preferences: Vec<ProposerId>,
}

impl Reviewer {
    #[must_use]
    pub fn new(id: u32, preferences: &[u32]) -> Self {
        Self {
            id: ReviewerId(id),
            preferences: preferences.iter().copied().map(ProposerId).collect(),
        }
    }
}

/// One stable-matching problem.
///
/// The collections may list participants in any order; identity is
/// carried by each record, not by its position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    pub proposers: Vec<Proposer>,
    pub reviewers: Vec<Reviewer>,
}

impl Instance {
    #[must_use]
    pub fn new(proposers: Vec<Proposer>, reviewers: Vec<Reviewer>) -> Self {
        Self {
            proposers,
            reviewers,
        }
    }

    /// Build an instance from raw preference rows where the row index is
    /// the participant's identity.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn from_tables(proposer_rows: &[Vec<u32>], reviewer_rows: &[Vec<u32>]) -> Self {
        Self {
            proposers: proposer_rows
                .iter()
                .enumerate()
                .map(|(i, row)| Proposer::new(i as u32, row))
                .collect(),
            reviewers: reviewer_rows
                .iter()
                .enumerate()
                .map(|(i, row)| Reviewer::new(i as u32, row))
                .collect(),
        }
    }

    /// Parse an instance from a JSON document.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of proposers (equals `n` for a valid instance).
    #[must_use]
    pub fn size(&self) -> usize {
        self.proposers.len()
    }

    /// The same problem with the roles exchanged: reviewers propose.
    ///
    /// Reviewer `r` becomes proposer `r` and vice versa, preference lists
    /// carried over unchanged.
    #[must_use]
    pub fn swapped(&self) -> Self {
        Self {
            proposers: self
                .reviewers
                .iter()
                .map(|r| Proposer {
                    id: ProposerId(r.id.0),
                    preferences: r.preferences.iter().map(|p| ReviewerId(p.0)).collect(),
                })
                .collect(),
            reviewers: self
                .proposers
                .iter()
                .map(|p| Reviewer {
                    id: ReviewerId(p.id.0),
                    preferences: p.preferences.iter().map(|r| ProposerId(r.0)).collect(),
                })
                .collect(),
        }
    }
}

/// Random instance generation. **Test use only.**
#[cfg(any(test, feature = "test-helpers"))]
impl Instance {
    /// A valid instance of size `n` with uniformly shuffled preference lists.
    #[allow(clippy::cast_possible_truncation)]
    pub fn random<R: rand::Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        use rand::seq::SliceRandom;

        let row = |rng: &mut R| {
            let mut ids: Vec<u32> = (0..n as u32).collect();
            ids.shuffle(rng);
            ids
        };
        let proposer_rows: Vec<Vec<u32>> = (0..n).map(|_| row(rng)).collect();
        let reviewer_rows: Vec<Vec<u32>> = (0..n).map(|_| row(rng)).collect();
        Self::from_tables(&proposer_rows, &reviewer_rows)
    }
}

//! Per-run participant arena.
//!
//! A [`Roster`] owns one state record per participant, stored by identity
//! rather than by input position. Building it performs every input check
//! the matcher needs, so a `Roster` only exists for a valid instance:
//!
//! 1. Both sides have the same cardinality `n`
//! 2. Every record's own identity is in `0..n` and unique on its side
//! 3. Every preference list is a permutation of the opposite side
//!
//! All records are allocated together and dropped together when the run
//! ends; nothing outlives a single matcher call.

use stablematch_types::{
    Instance, ParticipantId, Proposer, ProposerId, RankTable, Result, Reviewer, ReviewerId, Side,
    StableMatchError,
};

/// Mutable state of one proposer during a run.
#[derive(Debug, Clone)]
pub(crate) struct ProposerState {
    /// Reviewers in decreasing desirability.
    pub(crate) preferences: Vec<ReviewerId>,
    /// Inverse of `preferences`.
    pub(crate) ranks: RankTable<ReviewerId>,
    /// Index of the next reviewer to propose to. Only ever increases.
    pub(crate) cursor: usize,
    pub(crate) partner: Option<ReviewerId>,
}

impl ProposerState {
    /// Take the next unconsidered reviewer, advancing the cursor.
    pub(crate) fn next_candidate(&mut self) -> Option<ReviewerId> {
        let candidate = self.preferences.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(candidate)
    }

    pub(crate) fn has_candidates(&self) -> bool {
        self.cursor < self.preferences.len()
    }
}

/// Mutable state of one reviewer during a run.
#[derive(Debug, Clone)]
pub(crate) struct ReviewerState {
    pub(crate) ranks: RankTable<ProposerId>,
    pub(crate) partner: Option<ProposerId>,
}

/// Validated, identity-indexed participant records for one instance.
#[derive(Debug, Clone)]
pub struct Roster {
    pub(crate) proposers: Vec<ProposerState>,
    pub(crate) reviewers: Vec<ReviewerState>,
}

impl Roster {
    /// Validate `instance` and lay out its participants by identity.
    pub fn build(instance: &Instance) -> Result<Self> {
        Self::from_parts(&instance.proposers, &instance.reviewers)
    }

    /// Same as [`build`](Self::build) over borrowed participant slices.
    pub fn from_parts(proposers: &[Proposer], reviewers: &[Reviewer]) -> Result<Self> {
        let n = check_sizes(proposers.len(), reviewers.len())?;

        let proposer_slots = place_by_identity(proposers, n, |p| p.id)?;
        let reviewer_slots = place_by_identity(reviewers, n, |r| r.id)?;

        let proposers = proposer_slots
            .into_iter()
            .map(|p| {
                let ranks =
                    RankTable::for_participant(Side::Proposer, p.id.0, &p.preferences, n)?;
                Ok(ProposerState {
                    preferences: p.preferences.clone(),
                    ranks,
                    cursor: 0,
                    partner: None,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let reviewers = reviewer_slots
            .into_iter()
            .map(|r| {
                let ranks =
                    RankTable::for_participant(Side::Reviewer, r.id.0, &r.preferences, n)?;
                Ok(ReviewerState {
                    ranks,
                    partner: None,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            proposers,
            reviewers,
        })
    }

    /// Participants per side.
    #[must_use]
    pub fn n(&self) -> usize {
        self.proposers.len()
    }

    /// `proposer`'s ranking of the reviewers.
    ///
    /// # Panics
    /// Panics if `proposer` is not in `0..n`.
    #[must_use]
    pub fn proposer_ranks(&self, proposer: ProposerId) -> &RankTable<ReviewerId> {
        &self.proposers[proposer.index()].ranks
    }

    /// `reviewer`'s ranking of the proposers.
    ///
    /// # Panics
    /// Panics if `reviewer` is not in `0..n`.
    #[must_use]
    pub fn reviewer_ranks(&self, reviewer: ReviewerId) -> &RankTable<ProposerId> {
        &self.reviewers[reviewer.index()].ranks
    }

    /// `proposer`'s preference list, most preferred first.
    ///
    /// # Panics
    /// Panics if `proposer` is not in `0..n`.
    #[must_use]
    pub fn proposer_preferences(&self, proposer: ProposerId) -> &[ReviewerId] {
        &self.proposers[proposer.index()].preferences
    }
}

/// Enforce equal cardinality, returning `n`.
pub(crate) fn check_sizes(proposers: usize, reviewers: usize) -> Result<usize> {
    if proposers != reviewers {
        return Err(StableMatchError::SetSizeMismatch {
            proposers,
            reviewers,
        });
    }
    Ok(proposers)
}

/// Order `records` by identity, rejecting out-of-range and repeated ids.
fn place_by_identity<'a, R, I, F>(records: &'a [R], n: usize, id_of: F) -> Result<Vec<&'a R>>
where
    I: ParticipantId,
    F: Fn(&R) -> I,
{
    let mut slots: Vec<Option<&'a R>> = vec![None; n];
    for record in records {
        let id = id_of(record);
        let slot = slots
            .get_mut(id.index())
            .ok_or(StableMatchError::ParticipantIdOutOfRange {
                side: I::SIDE,
                id: id.raw(),
                n,
            })?;
        if slot.is_some() {
            return Err(StableMatchError::DuplicateParticipant {
                side: I::SIDE,
                id: id.raw(),
            });
        }
        *slot = Some(record);
    }
    // n records, n distinct in-range ids: every slot is filled.
    Ok(slots.into_iter().flatten().collect())
}

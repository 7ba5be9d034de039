//! Perfection and stability checks for a matching.
//!
//! A matching is **perfect** when every proposer and every reviewer appears
//! exactly once. A perfect matching is **stable** when it has no blocking
//! pair: no proposer `p` and reviewer `w`, not matched together, where `p`
//! prefers `w` to its partner and `w` prefers `p` to its partner.

use std::collections::BTreeMap;

use stablematch_types::{
    Instance, Matching, ParticipantId, ProposerId, Result, ReviewerId, StableMatchError,
};

use crate::Roster;

/// Check that `matching` pairs every participant of `instance` exactly once.
///
/// # Errors
/// Returns `InvariantViolation` naming the first missing or repeated
/// participant, or any input error from validating `instance`.
pub fn verify_perfect(instance: &Instance, matching: &Matching) -> Result<()> {
    let roster = Roster::build(instance)?;
    check_perfect(&roster, matching)
}

/// Every blocking pair of a perfect `matching`, in proposer order.
///
/// # Errors
/// Returns `InvariantViolation` if `matching` is not perfect.
pub fn blocking_pairs(
    instance: &Instance,
    matching: &Matching,
) -> Result<Vec<(ProposerId, ReviewerId)>> {
    let roster = Roster::build(instance)?;
    check_perfect(&roster, matching)?;
    Ok(find_blocking_pairs(&roster, matching))
}

/// `true` if `matching` is perfect and has no blocking pair.
///
/// # Errors
/// Only input errors from validating `instance`; an imperfect matching is
/// reported as `Ok(false)`.
pub fn is_stable(instance: &Instance, matching: &Matching) -> Result<bool> {
    let roster = Roster::build(instance)?;
    Ok(check_perfect(&roster, matching).is_ok()
        && find_blocking_pairs(&roster, matching).is_empty())
}

pub(crate) fn check_perfect(roster: &Roster, matching: &Matching) -> Result<()> {
    let n = roster.n();
    if matching.len() != n {
        return Err(violation(format!(
            "matching has {} pairs, expected {n}",
            matching.len()
        )));
    }

    let mut seen = vec![false; n];
    for index in 0..n {
        let proposer = ProposerId::from_index(index);
        let reviewer = matching
            .reviewer_of(proposer)
            .ok_or_else(|| violation(format!("{proposer} is unmatched")))?;
        let slot = seen
            .get_mut(reviewer.index())
            .ok_or_else(|| violation(format!("{proposer} matched to unknown {reviewer}")))?;
        if *slot {
            return Err(violation(format!("{reviewer} matched more than once")));
        }
        *slot = true;
    }
    Ok(())
}

/// Assumes `matching` already passed [`check_perfect`].
pub(crate) fn find_blocking_pairs(
    roster: &Roster,
    matching: &Matching,
) -> Vec<(ProposerId, ReviewerId)> {
    let partner_of_reviewer: BTreeMap<ReviewerId, ProposerId> = matching.inverse();
    let mut blocking = Vec::new();

    for (proposer, current) in matching.iter() {
        // Only reviewers ranked above the current partner can block.
        for &reviewer in roster.proposer_preferences(proposer) {
            if reviewer == current {
                break;
            }
            let held = partner_of_reviewer[&reviewer];
            if roster.reviewer_ranks(reviewer).prefers(proposer, held) {
                blocking.push((proposer, reviewer));
            }
        }
    }
    blocking
}

fn violation(reason: String) -> StableMatchError {
    StableMatchError::InvariantViolation { reason }
}

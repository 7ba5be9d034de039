//! Brute-force enumeration of stable matchings for small instances.
//!
//! Walks all `n!` perfect matchings in lexicographic order and keeps the
//! stable ones. Used to cross-check the matcher's optimality claims, so it
//! is capped at [`MAX_ENUMERATION_PARTICIPANTS`].
//!
//! [`MAX_ENUMERATION_PARTICIPANTS`]: stablematch_types::constants::MAX_ENUMERATION_PARTICIPANTS

use stablematch_types::{
    Instance, Matching, ParticipantId, ProposerId, Result, ReviewerId, StableMatchError,
    constants,
};

use crate::{
    Roster,
    stability::{check_perfect, find_blocking_pairs},
};

/// All stable matchings of `instance`, in lexicographic order of the
/// reviewer sequence assigned to proposers `0..n`.
///
/// # Errors
/// `InstanceTooLarge` above [`constants::MAX_ENUMERATION_PARTICIPANTS`],
/// plus any input error from validating `instance`.
pub fn all_stable_matchings(instance: &Instance) -> Result<Vec<Matching>> {
    let roster = Roster::build(instance)?;
    stable_matchings_of(&roster)
}

/// `true` if `matching` is stable and every proposer does at least as well
/// in it as in any other stable matching.
pub fn is_proposer_optimal(instance: &Instance, matching: &Matching) -> Result<bool> {
    let roster = Roster::build(instance)?;
    if !is_stable_in(&roster, matching) {
        return Ok(false);
    }
    let all = stable_matchings_of(&roster)?;
    Ok(matching.iter().all(|(proposer, reviewer)| {
        let ranks = roster.proposer_ranks(proposer);
        all.iter().all(|other| {
            other
                .reviewer_of(proposer)
                .is_none_or(|alt| ranks.rank_of(reviewer) <= ranks.rank_of(alt))
        })
    }))
}

/// `true` if `matching` is stable and every reviewer does at least as well
/// in it as in any other stable matching.
pub fn is_reviewer_optimal(instance: &Instance, matching: &Matching) -> Result<bool> {
    let roster = Roster::build(instance)?;
    if !is_stable_in(&roster, matching) {
        return Ok(false);
    }
    let all = stable_matchings_of(&roster)?;
    let ours = matching.inverse();
    Ok(ours.iter().all(|(&reviewer, &proposer)| {
        let ranks = roster.reviewer_ranks(reviewer);
        all.iter().all(|other| {
            other
                .proposer_of(reviewer)
                .is_none_or(|alt| ranks.rank_of(proposer) <= ranks.rank_of(alt))
        })
    }))
}

fn is_stable_in(roster: &Roster, matching: &Matching) -> bool {
    check_perfect(roster, matching).is_ok() && find_blocking_pairs(roster, matching).is_empty()
}

fn stable_matchings_of(roster: &Roster) -> Result<Vec<Matching>> {
    let n = roster.n();
    if n > constants::MAX_ENUMERATION_PARTICIPANTS {
        return Err(StableMatchError::InstanceTooLarge {
            n,
            limit: constants::MAX_ENUMERATION_PARTICIPANTS,
        });
    }

    let mut found = Vec::new();
    let mut assignment: Vec<ReviewerId> = Vec::with_capacity(n);
    let mut taken = vec![false; n];
    extend(roster, &mut assignment, &mut taken, &mut found);
    Ok(found)
}

/// Depth-first over reviewer choices for proposer `assignment.len()`.
fn extend(
    roster: &Roster,
    assignment: &mut Vec<ReviewerId>,
    taken: &mut [bool],
    found: &mut Vec<Matching>,
) {
    let n = taken.len();
    if assignment.len() == n {
        let matching: Matching = assignment
            .iter()
            .enumerate()
            .map(|(i, &r)| (ProposerId::from_index(i), r))
            .collect();
        if find_blocking_pairs(roster, &matching).is_empty() {
            found.push(matching);
        }
        return;
    }

    for index in 0..n {
        if taken[index] {
            continue;
        }
        taken[index] = true;
        assignment.push(ReviewerId::from_index(index));
        extend(roster, assignment, taken, found);
        assignment.pop();
        taken[index] = false;
    }
}

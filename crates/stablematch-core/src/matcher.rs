//! Deferred-acceptance (Gale-Shapley) matcher.
//!
//! The core matching function: takes two equal-size participant sets with
//! complete strict preference lists and produces the proposer-optimal
//! stable matching. No side effects, no I/O.
//!
//! ```text
//! stable_match(proposers, reviewers) -> Matching
//! ```
//!
//! ## Rejection Rule
//!
//! When a reviewer already holds a proposer, the newcomer wins only if the
//! reviewer's own rank table places it strictly higher. Rankings are strict,
//! so there are no ties to break.

use stablematch_types::{
    Instance, MatchReport, MatcherConfig, Matching, ParticipantId, Proposer, ProposerId, Result,
    Reviewer, ReviewerId, Side, StableMatchError,
};

use crate::{
    Roster,
    determinism::compute_matching_root,
    free_set::FreeSet,
    roster::check_sizes,
    stability::{check_perfect, find_blocking_pairs},
};

/// Proposer-optimal stable matching with the default configuration.
pub fn stable_match(proposers: &[Proposer], reviewers: &[Reviewer]) -> Result<Matching> {
    DeferredAcceptance::default()
        .run_parts(proposers, reviewers)
        .map(|report| report.matching)
}

/// Reviewer-optimal stable matching with the default configuration,
/// still keyed by proposer.
pub fn reviewer_optimal_match(proposers: &[Proposer], reviewers: &[Reviewer]) -> Result<Matching> {
    DeferredAcceptance::default()
        .run_reviewer_optimal_parts(proposers, reviewers)
        .map(|report| report.matching)
}

/// Counters accumulated by one pass of the proposal loop.
#[derive(Debug, Default, Clone, Copy)]
struct LoopStats {
    proposals: usize,
    rejections: usize,
}

/// The deferred-acceptance matcher.
///
/// # Algorithm
///
/// 1. Validate the instance and lay participants out by identity
/// 2. Seed the free set with every proposer
/// 3. Take a free proposer, propose to its next unconsidered reviewer
/// 4. An unmatched reviewer accepts; a matched one keeps whichever of the
///    two proposers it ranks higher and the loser returns to the free set
///    (if it still has reviewers to try)
/// 5. Stop when the free set is empty and read off the partners
///
/// Every proposal advances a cursor that never moves back, so the loop
/// makes at most `n * n` proposals.
#[derive(Debug, Clone, Default)]
pub struct DeferredAcceptance {
    config: MatcherConfig,
}

impl DeferredAcceptance {
    #[must_use]
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Run on an [`Instance`], returning the proposer-optimal matching and
    /// run statistics.
    ///
    /// # Errors
    /// Any input error (`SetSizeMismatch`, `InvalidPreferenceList`, ...)
    /// before the first proposal, `InstanceTooLarge` above an opt-in
    /// `max_participants` limit, or `InvariantViolation` if the produced matching fails the
    /// post-run checks.
    pub fn run(&self, instance: &Instance) -> Result<MatchReport> {
        self.run_parts(&instance.proposers, &instance.reviewers)
    }

    /// Same as [`run`](Self::run) over borrowed participant slices.
    pub fn run_parts(&self, proposers: &[Proposer], reviewers: &[Reviewer]) -> Result<MatchReport> {
        let report = self.solve(proposers, reviewers)?;
        log_completion(&report, Side::Proposer);
        Ok(report)
    }

    /// Reviewer-optimal stable matching: reviewers propose, and the result
    /// is translated back to proposer → reviewer form.
    pub fn run_reviewer_optimal(&self, instance: &Instance) -> Result<MatchReport> {
        self.run_reviewer_optimal_parts(&instance.proposers, &instance.reviewers)
    }

    /// Same as [`run_reviewer_optimal`](Self::run_reviewer_optimal) over
    /// borrowed participant slices.
    pub fn run_reviewer_optimal_parts(
        &self,
        proposers: &[Proposer],
        reviewers: &[Reviewer],
    ) -> Result<MatchReport> {
        // Validate with the caller's roles so errors name the right side.
        let n = check_sizes(proposers.len(), reviewers.len())?;
        self.check_limit(n)?;
        Roster::from_parts(proposers, reviewers)?;

        let swapped = Instance::new(proposers.to_vec(), reviewers.to_vec()).swapped();
        let mut report = self.solve(&swapped.proposers, &swapped.reviewers)?;

        report.matching = report
            .matching
            .iter()
            .map(|(reviewer_as_proposer, proposer_as_reviewer)| {
                (
                    ProposerId(proposer_as_reviewer.0),
                    ReviewerId(reviewer_as_proposer.0),
                )
            })
            .collect();
        report.matching_root = compute_matching_root(&report.matching);
        log_completion(&report, Side::Reviewer);
        Ok(report)
    }

    /// Solve independent instances one after another.
    ///
    /// Each instance gets its own roster; a failure in one does not affect
    /// the others. Results are returned in input order.
    pub fn run_batch(&self, instances: &[Instance]) -> Vec<Result<MatchReport>> {
        instances
            .iter()
            .enumerate()
            .map(|(index, instance)| {
                self.run(instance).inspect_err(|err| {
                    tracing::warn!(instance = index, error = %err, "Batch instance rejected");
                })
            })
            .collect()
    }

    /// Validate, run the proposal loop and build the report. Logs nothing
    /// at info level; callers log once the report is in caller terms.
    fn solve(&self, proposers: &[Proposer], reviewers: &[Reviewer]) -> Result<MatchReport> {
        let n = check_sizes(proposers.len(), reviewers.len())?;
        self.check_limit(n)?;
        let mut roster = Roster::from_parts(proposers, reviewers)?;

        let stats = self.propose_until_stable(&mut roster);
        let matching = extract_matching(&roster)?;

        if self.config.verify_stability {
            verify_output(&roster, &matching)?;
        }

        let matching_root = compute_matching_root(&matching);
        Ok(MatchReport {
            n,
            matching,
            proposals: stats.proposals,
            rejections: stats.rejections,
            matching_root,
        })
    }

    fn check_limit(&self, n: usize) -> Result<()> {
        match self.config.max_participants {
            Some(limit) if n > limit => Err(StableMatchError::InstanceTooLarge { n, limit }),
            _ => Ok(()),
        }
    }

    /// The proposal loop. Mutates cursors and partners in `roster`.
    fn propose_until_stable(&self, roster: &mut Roster) -> LoopStats {
        let mut stats = LoopStats::default();
        let mut free = FreeSet::new(
            self.config.queue_discipline,
            (0..roster.n()).map(ProposerId::from_index),
        );

        while let Some(proposer) = free.pop() {
            // Valid input never exhausts a free proposer; skip rather than spin.
            let Some(reviewer) = roster.proposers[proposer.index()].next_candidate() else {
                continue;
            };
            stats.proposals += 1;

            let held = &mut roster.reviewers[reviewer.index()];
            match held.partner {
                None => {
                    held.partner = Some(proposer);
                    roster.proposers[proposer.index()].partner = Some(reviewer);
                    debug_assert_engaged(roster, proposer, reviewer);
                    tracing::debug!(%proposer, %reviewer, "Engaged");
                }
                Some(incumbent) if held.ranks.prefers(proposer, incumbent) => {
                    debug_assert!(
                        held.ranks.rank_of(proposer) < held.ranks.rank_of(incumbent),
                        "{reviewer} must strictly improve when trading {incumbent} for {proposer}"
                    );
                    held.partner = Some(proposer);
                    roster.proposers[proposer.index()].partner = Some(reviewer);

                    let released = &mut roster.proposers[incumbent.index()];
                    released.partner = None;
                    stats.rejections += 1;
                    if released.has_candidates() {
                        free.push(incumbent);
                    }
                    tracing::debug!(
                        %proposer,
                        %reviewer,
                        released = %incumbent,
                        free = free.len(),
                        "Engaged, incumbent released"
                    );
                    debug_assert_engaged(roster, proposer, reviewer);
                }
                Some(incumbent) => {
                    stats.rejections += 1;
                    if roster.proposers[proposer.index()].has_candidates() {
                        free.push(proposer);
                    }
                    tracing::debug!(%proposer, %reviewer, kept = %incumbent, "Rejected");
                }
            }
        }

        stats
    }
}

/// Only the records touched by a step change, so checking them after each
/// step keeps every engagement symmetric for the whole run.
fn debug_assert_engaged(roster: &Roster, proposer: ProposerId, reviewer: ReviewerId) {
    debug_assert_eq!(
        roster.proposers[proposer.index()].partner,
        Some(reviewer),
        "{proposer} must hold {reviewer}"
    );
    debug_assert_eq!(
        roster.reviewers[reviewer.index()].partner,
        Some(proposer),
        "{reviewer} must hold {proposer}"
    );
}

fn log_completion(report: &MatchReport, optimal: Side) {
    tracing::info!(
        n = report.n,
        proposals = report.proposals,
        rejections = report.rejections,
        %optimal,
        matching_root = hex::encode(report.matching_root),
        "Stable matching complete"
    );
}

/// Read every proposer's final partner. Fails rather than returning a
/// partial mapping.
fn extract_matching(roster: &Roster) -> Result<Matching> {
    roster
        .proposers
        .iter()
        .enumerate()
        .map(|(index, state)| {
            let proposer = ProposerId::from_index(index);
            state
                .partner
                .map(|reviewer| (proposer, reviewer))
                .ok_or_else(|| StableMatchError::InvariantViolation {
                    reason: format!("{proposer} finished unmatched"),
                })
        })
        .collect()
}

fn verify_output(roster: &Roster, matching: &Matching) -> Result<()> {
    if let Err(err) = check_perfect(roster, matching) {
        tracing::warn!(error = %err, "Matcher produced an imperfect matching");
        return Err(err);
    }
    let blocking = find_blocking_pairs(roster, matching);
    if let Some(&(proposer, reviewer)) = blocking.first() {
        tracing::warn!(
            %proposer,
            %reviewer,
            count = blocking.len(),
            "Matcher produced an unstable matching"
        );
        return Err(StableMatchError::InvariantViolation {
            reason: format!("blocking pair ({proposer}, {reviewer})"),
        });
    }
    Ok(())
}

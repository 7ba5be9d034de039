//! Integration test: matcher properties over random instances
//!
//! Every valid instance must produce a perfect, stable, proposer-optimal
//! matching within n^2 proposals, identically on every run.

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use stablematch_core::*;
use stablematch_types::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn random_instances(
    seed: u64,
    sizes: std::ops::RangeInclusive<usize>,
    per_size: usize,
) -> Vec<Instance> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = Vec::new();
    for n in sizes {
        for _ in 0..per_size {
            out.push(Instance::random(n, &mut rng));
        }
    }
    out
}

#[test]
fn result_is_a_perfect_matching() {
    init_tracing();
    for inst in random_instances(1, 0..=12, 10) {
        let report = DeferredAcceptance::default().run(&inst).unwrap();
        assert_eq!(report.matching.len(), inst.size());
        assert_eq!(report.matching.inverse().len(), inst.size());
        verify_perfect(&inst, &report.matching).unwrap();
    }
}

#[test]
fn result_has_no_blocking_pair() {
    init_tracing();
    for inst in random_instances(2, 1..=15, 10) {
        let matching = stable_match(&inst.proposers, &inst.reviewers).unwrap();
        let blocking = blocking_pairs(&inst, &matching).unwrap();
        assert!(blocking.is_empty(), "blocking pairs: {blocking:?}");
    }
}

#[test]
fn proposals_bounded_by_n_squared() {
    init_tracing();
    for inst in random_instances(3, 0..=20, 5) {
        let n = inst.size();
        let report = DeferredAcceptance::default().run(&inst).unwrap();
        assert!(
            report.proposals <= n * n,
            "n={n} proposals={}",
            report.proposals
        );
        assert!(report.proposals >= n);
        assert_eq!(report.proposals - report.rejections, n);
    }
}

#[test]
fn worst_case_proposal_count_stays_within_bound() {
    // Every proposer shares one ranking and every reviewer ranks proposers
    // in reverse: each new proposer displaces the previous holder.
    let n = 6;
    let forward: Vec<u32> = (0..n).collect();
    let backward: Vec<u32> = (0..n).rev().collect();
    let inst = Instance::from_tables(&vec![forward; n as usize], &vec![backward; n as usize]);
    let report = DeferredAcceptance::default().run(&inst).unwrap();
    assert!(report.proposals <= (n * n) as usize);
    assert!(is_stable(&inst, &report.matching).unwrap());
}

#[test]
fn proposer_optimal_against_brute_force() {
    init_tracing();
    for inst in random_instances(4, 1..=5, 12) {
        let matching = stable_match(&inst.proposers, &inst.reviewers).unwrap();
        let all = all_stable_matchings(&inst).unwrap();
        assert!(all.contains(&matching), "matcher output missing from enumeration");
        assert!(is_proposer_optimal(&inst, &matching).unwrap());
    }
}

#[test]
fn reviewer_optimal_against_brute_force() {
    for inst in random_instances(5, 1..=5, 12) {
        let matching = reviewer_optimal_match(&inst.proposers, &inst.reviewers).unwrap();
        assert!(is_stable(&inst, &matching).unwrap());
        assert!(is_reviewer_optimal(&inst, &matching).unwrap());
    }
}

#[test]
fn repeated_runs_are_identical() {
    let matcher = DeferredAcceptance::default();
    for inst in random_instances(6, 2..=10, 3) {
        let first = matcher.run(&inst).unwrap();
        for _ in 0..5 {
            let again = matcher.run(&inst).unwrap();
            assert_eq!(first.matching, again.matching);
            assert_eq!(
                first.matching_root,
                again.matching_root,
                "root drift: {} vs {}",
                hex::encode(first.matching_root),
                hex::encode(again.matching_root)
            );
            assert!(verify_matching_root(&again.matching, &first.matching_root));
        }
    }
}

#[test]
fn record_order_does_not_change_result() {
    let mut rng = StdRng::seed_from_u64(7);
    for inst in random_instances(8, 2..=10, 4) {
        let expected = stable_match(&inst.proposers, &inst.reviewers).unwrap();

        let mut shuffled = inst.clone();
        shuffled.proposers.shuffle(&mut rng);
        shuffled.reviewers.shuffle(&mut rng);
        let got = stable_match(&shuffled.proposers, &shuffled.reviewers).unwrap();
        assert_eq!(expected, got);
    }
}

#[test]
fn queue_discipline_does_not_change_result() {
    let lifo = DeferredAcceptance::new(
        MatcherConfig::default()
            .with_discipline(QueueDiscipline::Lifo)
            .with_verification(true),
    );
    for inst in random_instances(9, 1..=12, 6) {
        let expected = stable_match(&inst.proposers, &inst.reviewers).unwrap();
        assert_eq!(lifo.run(&inst).unwrap().matching, expected);
    }
}

#[test]
fn batch_matches_individual_runs() {
    let instances = random_instances(10, 0..=8, 2);
    let matcher = DeferredAcceptance::default();
    let batch = matcher.run_batch(&instances);
    assert_eq!(batch.len(), instances.len());
    for (inst, result) in instances.iter().zip(batch) {
        assert_eq!(result.unwrap(), matcher.run(inst).unwrap());
    }
}

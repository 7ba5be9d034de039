//! Integration test: fixed scenarios and input validation
//!
//! Hand-written instances with known answers, plus every way the matcher
//! refuses malformed input before it starts.

use stablematch_core::*;
use stablematch_types::*;

fn rows4() -> Vec<Vec<u32>> {
    vec![
        vec![0, 1, 2, 3],
        vec![2, 3, 0, 1],
        vec![1, 0, 3, 2],
        vec![3, 2, 1, 0],
    ]
}

#[test]
fn four_participant_scenario() {
    let inst = Instance::from_tables(&rows4(), &rows4());
    let matching = stable_match(&inst.proposers, &inst.reviewers).unwrap();
    assert_eq!(matching.to_pairs(), vec![(0, 0), (1, 2), (2, 1), (3, 3)]);

    let inverse = matching.inverse();
    assert_eq!(inverse[&ReviewerId(2)], ProposerId(1));
    assert_eq!(inverse[&ReviewerId(1)], ProposerId(2));
}

#[test]
fn empty_instance() {
    let matching = stable_match(&[], &[]).unwrap();
    assert!(matching.is_empty());
}

#[test]
fn single_pair() {
    let matching = stable_match(&[Proposer::new(0, &[0])], &[Reviewer::new(0, &[0])]).unwrap();
    assert_eq!(matching.to_pairs(), vec![(0, 0)]);
}

#[test]
fn identity_not_position() {
    // Same problem as the 4x4 scenario with records listed back to front.
    let mut inst = Instance::from_tables(&rows4(), &rows4());
    inst.proposers.reverse();
    inst.reviewers.rotate_left(1);
    let matching = stable_match(&inst.proposers, &inst.reviewers).unwrap();
    assert_eq!(matching.to_pairs(), vec![(0, 0), (1, 2), (2, 1), (3, 3)]);
}

#[test]
fn larger_than_four_participants() {
    // Proposer i ranks reviewer i first; reviewer i ranks proposer i first.
    let n = 9u32;
    let rows: Vec<Vec<u32>> = (0..n)
        .map(|i| (0..n).map(|k| (i + k) % n).collect())
        .collect();
    let inst = Instance::from_tables(&rows, &rows);
    let matching = stable_match(&inst.proposers, &inst.reviewers).unwrap();
    let expected: Vec<(u32, u32)> = (0..n).map(|i| (i, i)).collect();
    assert_eq!(matching.to_pairs(), expected);
}

#[test]
fn json_instance_end_to_end() {
    let json = r#"{
        "proposers": [
            { "id": 1, "preferences": [0, 1] },
            { "id": 0, "preferences": [0, 1] }
        ],
        "reviewers": [
            { "id": 0, "preferences": [1, 0] },
            { "id": 1, "preferences": [1, 0] }
        ]
    }"#;
    let inst = Instance::from_json(json).unwrap();
    let report = DeferredAcceptance::default().run(&inst).unwrap();
    assert_eq!(report.matching.to_pairs(), vec![(0, 1), (1, 0)]);

    let out = serde_json::to_value(&report.matching).unwrap();
    assert_eq!(out, serde_json::json!({ "pairs": { "0": 1, "1": 0 } }));
}

// ---------------------------------------------------------------------------
// Error cases
// ---------------------------------------------------------------------------

fn expect_invalid_list(inst: &Instance, side: Side, id: u32) -> PreferenceDefect {
    match stable_match(&inst.proposers, &inst.reviewers).unwrap_err() {
        StableMatchError::InvalidPreferenceList {
            side: got_side,
            id: got_id,
            defect,
        } => {
            assert_eq!((got_side, got_id), (side, id));
            defect
        }
        other => panic!("expected InvalidPreferenceList, got {other}"),
    }
}

#[test]
fn missing_id_rejected() {
    let mut reviewers = rows4();
    reviewers[2] = vec![1, 0, 3];
    let inst = Instance::from_tables(&rows4(), &reviewers);
    let defect = expect_invalid_list(&inst, Side::Reviewer, 2);
    assert_eq!(
        defect,
        PreferenceDefect::WrongLength {
            expected: 4,
            actual: 3
        }
    );
}

#[test]
fn duplicate_id_rejected() {
    let mut proposers = rows4();
    proposers[3] = vec![3, 2, 2, 0];
    let inst = Instance::from_tables(&proposers, &rows4());
    let defect = expect_invalid_list(&inst, Side::Proposer, 3);
    assert_eq!(defect, PreferenceDefect::Duplicate(2));
}

#[test]
fn out_of_range_id_rejected() {
    let mut proposers = rows4();
    proposers[0] = vec![0, 1, 2, 4];
    let inst = Instance::from_tables(&proposers, &rows4());
    let defect = expect_invalid_list(&inst, Side::Proposer, 0);
    assert_eq!(defect, PreferenceDefect::OutOfRange(4));
}

#[test]
fn set_size_mismatch_rejected() {
    let rows = rows4();
    let inst = Instance::from_tables(&rows, &rows[..3]);
    let err = stable_match(&inst.proposers, &inst.reviewers).unwrap_err();
    assert!(matches!(
        err,
        StableMatchError::SetSizeMismatch {
            proposers: 4,
            reviewers: 3
        }
    ));
}

#[test]
fn validation_happens_before_matching() {
    // The bad list belongs to the last reviewer, who would only be reached
    // late in the run; the error must still surface with no partial result.
    let mut reviewers = rows4();
    reviewers[3] = vec![0, 0, 0, 0];
    let inst = Instance::from_tables(&rows4(), &reviewers);
    let results = DeferredAcceptance::default().run_batch(&[inst]);
    assert!(matches!(
        results[0],
        Err(StableMatchError::InvalidPreferenceList {
            side: Side::Reviewer,
            id: 3,
            ..
        })
    ));
}

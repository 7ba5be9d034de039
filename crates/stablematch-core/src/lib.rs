//! # stablematch-core
//!
//! **Pure deterministic stable matcher.**
//!
//! Takes two equal-size participant sets, each ranking every member of the
//! other, and produces a stable perfect matching by deferred acceptance.
//! It has:
//!
//! - **Zero side effects**: no I/O, no shared state, one arena per call
//! - **Deterministic output**: same input -> same matching and matching root
//! - **Up-front validation**: malformed input fails before the first proposal
//! - **Verification**: stability checks and brute-force enumeration for
//!   cross-checking optimality on small instances

pub mod determinism;
pub mod enumerate;
mod free_set;
pub mod matcher;
pub mod roster;
pub mod stability;

pub use determinism::{compute_matching_root, verify_matching_root};
pub use enumerate::{all_stable_matchings, is_proposer_optimal, is_reviewer_optimal};
pub use matcher::{DeferredAcceptance, reviewer_optimal_match, stable_match};
pub use roster::Roster;
pub use stability::{blocking_pairs, is_stable, verify_perfect};

//! Error types for the stablematch matcher.
//!
//! All errors use the `SM_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Input / preference errors
//! - 2xx: Limit errors
//! - 3xx: Matching invariant errors
//! - 9xx: General / internal errors

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Side;

/// Why a preference list is not a permutation of the opposite set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreferenceDefect {
    /// The list does not rank exactly `n` participants.
    WrongLength { expected: usize, actual: usize },
    /// The same identity is ranked twice.
    Duplicate(u32),
    /// An identity outside `0..n` is ranked.
    OutOfRange(u32),
}

impl fmt::Display for PreferenceDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, actual } => {
                write!(f, "expected {expected} entries, got {actual}")
            }
            Self::Duplicate(id) => write!(f, "id {id} ranked more than once"),
            Self::OutOfRange(id) => write!(f, "id {id} is out of range"),
        }
    }
}

/// Central error enum for all stablematch operations.
#[derive(Debug, Error)]
pub enum StableMatchError {
    // =================================================================
    // Input Errors (1xx)
    // =================================================================
    /// A participant's list is not a permutation of the opposite set.
    #[error("SM_ERR_100: Invalid preference list for {side} {id}: {defect}")]
    InvalidPreferenceList {
        side: Side,
        id: u32,
        defect: PreferenceDefect,
    },

    /// Proposer and reviewer sets have different cardinalities.
    #[error("SM_ERR_101: Set size mismatch: {proposers} proposers, {reviewers} reviewers")]
    SetSizeMismatch { proposers: usize, reviewers: usize },

    /// Two records on the same side claim the same identity.
    #[error("SM_ERR_102: Duplicate {side} id {id}")]
    DuplicateParticipant { side: Side, id: u32 },

    /// A record's own identity lies outside `0..n`.
    #[error("SM_ERR_103: {side} id {id} out of range for n = {n}")]
    ParticipantIdOutOfRange { side: Side, id: u32, n: usize },

    // =================================================================
    // Limit Errors (2xx)
    // =================================================================
    /// The instance exceeds the configured or algorithmic size limit.
    #[error("SM_ERR_200: Instance too large: n = {n} exceeds limit {limit}")]
    InstanceTooLarge { n: usize, limit: usize },

    // =================================================================
    // Matching Errors (3xx)
    // =================================================================
    /// A produced matching failed a perfection or stability check.
    #[error("SM_ERR_300: Matching invariant violated: {reason}")]
    InvariantViolation { reason: String },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Serialization / deserialization error.
    #[error("SM_ERR_901: Serialization error: {0}")]
    Serialization(String),

    /// Configuration error (invalid config document, bad limits, etc.).
    #[error("SM_ERR_902: Configuration error: {0}")]
    Configuration(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, StableMatchError>;

impl From<serde_json::Error> for StableMatchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

//! Participant identifiers.
//!
//! Both sides are identified by a dense integer `0..n`. The identity is
//! stable and independent of where a record happens to sit in an input
//! collection; storage that is indexed by identity goes through
//! [`ParticipantId::index`].

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Side
// ---------------------------------------------------------------------------

/// Which of the two participant sets a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Side {
    Proposer,
    Reviewer,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Proposer => write!(f, "proposer"),
            Self::Reviewer => write!(f, "reviewer"),
        }
    }
}

// ---------------------------------------------------------------------------
// ParticipantId
// ---------------------------------------------------------------------------

/// Common behaviour of [`ProposerId`] and [`ReviewerId`].
///
/// Lets rank tables and validation be written once for both sides while
/// keeping the two identity spaces distinct at the type level.
pub trait ParticipantId: Copy + Eq + Ord + fmt::Debug + fmt::Display {
    /// The set this identifier lives in.
    const SIDE: Side;

    /// Build an identifier from a dense index.
    fn from_index(index: usize) -> Self;

    /// The dense storage index of this identifier.
    fn index(self) -> usize;

    /// Raw numeric identity.
    fn raw(self) -> u32;
}

// ---------------------------------------------------------------------------
// ProposerId
// ---------------------------------------------------------------------------

/// Identity of a proposer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ProposerId(pub u32);

impl ParticipantId for ProposerId {
    const SIDE: Side = Side::Proposer;

    #[allow(clippy::cast_possible_truncation)]
    fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    fn index(self) -> usize {
        self.0 as usize
    }

    fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProposerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// ReviewerId
// ---------------------------------------------------------------------------

/// Identity of a reviewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ReviewerId(pub u32);

impl ParticipantId for ReviewerId {
    const SIDE: Side = Side::Reviewer;

    #[allow(clippy::cast_possible_truncation)]
    fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    fn index(self) -> usize {
        self.0 as usize
    }

    fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ReviewerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

//! Validated preference rankings.
//!
//! A [`RankTable`] is the inverse of a preference list: it maps each
//! identity of the opposite set to its position in the list (lower = more
//! preferred). Building one is also the permutation check: a table only
//! exists for lists that rank every identity in `0..n` exactly once.

use std::marker::PhantomData;

use crate::{ParticipantId, PreferenceDefect, Result, Side, StableMatchError};

const UNRANKED: u32 = u32::MAX;

/// O(1) "who do I prefer" lookup over the opposite set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankTable<T: ParticipantId> {
    /// Rank position indexed by the ranked participant's identity.
    ranks: Vec<u32>,
    _ranked: PhantomData<T>,
}

impl<T: ParticipantId> RankTable<T> {
    /// Invert `preferences`, checking that it is a permutation of `0..n`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_preferences(
        preferences: &[T],
        n: usize,
    ) -> std::result::Result<Self, PreferenceDefect> {
        if preferences.len() != n {
            return Err(PreferenceDefect::WrongLength {
                expected: n,
                actual: preferences.len(),
            });
        }

        let mut ranks = vec![UNRANKED; n];
        for (position, &id) in preferences.iter().enumerate() {
            let slot = ranks
                .get_mut(id.index())
                .ok_or(PreferenceDefect::OutOfRange(id.raw()))?;
            if *slot != UNRANKED {
                return Err(PreferenceDefect::Duplicate(id.raw()));
            }
            *slot = position as u32;
        }

        // Right length, no duplicates, nothing out of range: every slot is
        // filled, so the list is a permutation.
        Ok(Self {
            ranks,
            _ranked: PhantomData,
        })
    }

    /// Same as [`from_preferences`](Self::from_preferences), attributing a
    /// defect to the participant that owns the list.
    pub fn for_participant(
        owner_side: Side,
        owner_id: u32,
        preferences: &[T],
        n: usize,
    ) -> Result<Self> {
        Self::from_preferences(preferences, n).map_err(|defect| {
            StableMatchError::InvalidPreferenceList {
                side: owner_side,
                id: owner_id,
                defect,
            }
        })
    }

    /// Position of `id` in the original list (0 = most preferred).
    ///
    /// # Panics
    /// Panics if `id` is outside the table's range.
    #[must_use]
    pub fn rank_of(&self, id: T) -> usize {
        self.ranks[id.index()] as usize
    }

    /// `true` if `a` is strictly preferred over `b`.
    #[must_use]
    pub fn prefers(&self, a: T, b: T) -> bool {
        self.rank_of(a) < self.rank_of(b)
    }

    /// Number of ranked participants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// `true` for the n = 0 table.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

//! The set of proposers that are free and still have reviewers to try.
//!
//! Stored as a [`VecDeque`] of identities. The matcher never holds
//! references between participant records; it only moves ids in and out
//! of this queue and looks records up in the [`Roster`](crate::Roster).

use std::collections::VecDeque;

use stablematch_types::{ProposerId, QueueDiscipline};

#[derive(Debug, Clone)]
pub(crate) struct FreeSet {
    queue: VecDeque<ProposerId>,
    discipline: QueueDiscipline,
}

impl FreeSet {
    /// Create a free set seeded with `initial`, in iteration order.
    pub(crate) fn new(
        discipline: QueueDiscipline,
        initial: impl IntoIterator<Item = ProposerId>,
    ) -> Self {
        Self {
            queue: initial.into_iter().collect(),
            discipline,
        }
    }

    /// Return a proposer to the set.
    pub(crate) fn push(&mut self, proposer: ProposerId) {
        self.queue.push_back(proposer);
    }

    /// Take the next proposer according to the discipline.
    pub(crate) fn pop(&mut self) -> Option<ProposerId> {
        match self.discipline {
            QueueDiscipline::Fifo => self.queue.pop_front(),
            QueueDiscipline::Lifo => self.queue.pop_back(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u32]) -> Vec<ProposerId> {
        raw.iter().copied().map(ProposerId).collect()
    }

    #[test]
    fn fifo_order() {
        let mut set = FreeSet::new(QueueDiscipline::Fifo, ids(&[0, 1]));
        set.push(ProposerId(2));
        assert_eq!(set.len(), 3);
        assert_eq!(set.pop(), Some(ProposerId(0)));
        assert_eq!(set.pop(), Some(ProposerId(1)));
        assert_eq!(set.pop(), Some(ProposerId(2)));
        assert_eq!(set.len(), 0);
        assert_eq!(set.pop(), None);
    }

    #[test]
    fn lifo_order() {
        let mut set = FreeSet::new(QueueDiscipline::Lifo, ids(&[0, 1]));
        set.push(ProposerId(2));
        assert_eq!(set.pop(), Some(ProposerId(2)));
        assert_eq!(set.pop(), Some(ProposerId(1)));
        assert_eq!(set.pop(), Some(ProposerId(0)));
        assert_eq!(set.pop(), None);
    }
}

//! Matcher configuration.

use serde::{Deserialize, Serialize};

use crate::{Result, StableMatchError};

/// Order in which free proposers are taken from the free set.
///
/// Either discipline yields the same proposer-optimal matching; only the
/// sequence of intermediate engagements differs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueueDiscipline {
    /// Oldest free proposer first.
    #[default]
    Fifo,
    /// Most recently freed proposer first.
    Lifo,
}

/// Configuration for a deferred-acceptance matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Optional cap on `n`; bigger instances fail with `InstanceTooLarge`.
    /// `None` (the default) accepts any size. A run holds about `3 * n * n`
    /// `u32` entries, so `n = 4096` is roughly 200 MB.
    pub max_participants: Option<usize>,
    /// Free-set ordering.
    pub queue_discipline: QueueDiscipline,
    /// Re-check perfection and stability of every produced matching.
    pub verify_stability: bool,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            max_participants: None,
            queue_discipline: QueueDiscipline::Fifo,
            verify_stability: false,
        }
    }
}

impl MatcherConfig {
    /// Parse a JSON config document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| StableMatchError::Configuration(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject configurations the matcher cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.max_participants == Some(0) {
            return Err(StableMatchError::Configuration(
                "max_participants must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn with_discipline(mut self, discipline: QueueDiscipline) -> Self {
        self.queue_discipline = discipline;
        self
    }

    #[must_use]
    pub fn with_verification(mut self, verify: bool) -> Self {
        self.verify_stability = verify;
        self
    }

    #[must_use]
    pub fn with_max_participants(mut self, limit: usize) -> Self {
        self.max_participants = Some(limit);
        self
    }
}

//! # stablematch-types
//!
//! Shared types, errors, and configuration for the **stablematch**
//! deferred-acceptance matcher.
//!
//! This crate is the leaf dependency of the workspace. It defines:
//!
//! - **Identifiers**: [`ProposerId`], [`ReviewerId`], [`Side`], [`ParticipantId`]
//! - **Input model**: [`Proposer`], [`Reviewer`], [`Instance`]
//! - **Rankings**: [`RankTable`] (validated inverse of a preference list)
//! - **Output model**: [`Matching`], [`MatchReport`]
//! - **Configuration**: [`MatcherConfig`], [`QueueDiscipline`]
//! - **Errors**: [`StableMatchError`] with `SM_ERR_` prefix codes
//! - **Constants**: system-wide limits and defaults

pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod instance;
pub mod matching;
pub mod preference;

pub use config::*;
pub use error::*;
pub use ids::*;
pub use instance::*;
pub use matching::*;
pub use preference::*;

// Constants are accessed via `stablematch_types::constants::FOO`.

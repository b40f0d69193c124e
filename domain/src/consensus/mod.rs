//! Consensus domain
//!
//! This module contains the vote-aggregation engine used to decide whether a
//! round of planning poker is accepted.
//!
//! # Flow
//!
//! ```text
//! ┌──────────┐    ┌────────────────────────┐    ┌──────────────────────┐
//! │  Votes   │ -> │ aggregate(votes, mode, │ -> │ RoundOutcome         │
//! │ id->card │    │           player_count)│    │ {consensus, value}   │
//! └──────────┘    └────────────────────────┘    └──────────────────────┘
//! ```
//!
//! The engine has no state: the session store feeds it the current round and
//! decides what to do with the outcome.

pub mod engine;
pub mod mode;
pub mod outcome;
pub mod votes;

// Re-export main types
pub use engine::{aggregate, aggregate_with, snap_to_deck};
pub use mode::{GameMode, TieBreak};
pub use outcome::RoundOutcome;
pub use votes::Votes;

//! Domain layer for scrum-poker
//!
//! This crate contains the planning poker rules: the session state machine,
//! the vote-aggregation engine and the snapshot codec. It has no dependencies
//! on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Session
//!
//! A facilitator defines players and a backlog, then every feature is voted
//! on round after round until the round is accepted. Accepted features move
//! to an append-only history.
//!
//! ## Consensus
//!
//! Five game modes decide whether a round is accepted:
//!
//! - **strict**: everyone played the same card
//! - **average** / **median**: computed from the numeric cards, snapped to the deck
//! - **absolute_majority**: one card played by more than half of the players
//! - **relative_majority**: the most played card

pub mod config;
pub mod consensus;
pub mod core;
pub mod session;
pub mod snapshot;

// Re-export commonly used types
pub use config::validation::{ConfigIssue, ConfigIssueCode, Severity};
pub use consensus::{
    GameMode, RoundOutcome, TieBreak, Votes, aggregate, aggregate_with, snap_to_deck,
};
pub use crate::core::{card::Card, error::DomainError};
pub use session::{
    backlog::parse_backlog,
    entities::{CompletedFeature, Feature, Player},
    export::ResultsExport,
    store::{Progress, Session, SessionPhase, Transition},
};

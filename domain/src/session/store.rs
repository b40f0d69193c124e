//! Session store
//!
//! [`Session`] is the aggregate root of a planning poker play-through. It owns
//! the roster, the backlog, the votes of the current round and the history of
//! completed features, and only changes through the guarded operations below.
//!
//! # State machine
//!
//! ```text
//!  Setup ──start──> Voting ──evaluate_round──> RoundOutcome
//!                     ^  │                          │
//!                     │  └── next_round <── no consensus
//!                     │                             │
//!                     └──── complete_feature <── consensus
//!                                 │
//!                                 └──(last feature)──> Finished
//! ```

use super::entities::{CompletedFeature, Feature, Player, validate_backlog, validate_players};
use crate::consensus::{GameMode, RoundOutcome, TieBreak, Votes, aggregate_with};
use crate::core::card::Card;
use crate::core::error::DomainError;
use serde::Serialize;

/// Where the session stands in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Players and backlog are being defined
    Setup,
    /// Votes are open for a feature
    Voting { feature_index: usize, round: u32 },
    /// Every backlog feature has an estimate
    Finished,
}

impl SessionPhase {
    pub fn as_str(&self) -> &str {
        match self {
            SessionPhase::Setup => "setup",
            SessionPhase::Voting { .. } => "voting",
            SessionPhase::Finished => "finished",
        }
    }

    pub fn is_voting(&self) -> bool {
        matches!(self, SessionPhase::Voting { .. })
    }
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// State change produced by closing a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Votes were discarded and a new round opened on the same feature
    RoundAdvanced { round: u32 },
    /// The feature was estimated and moved to the history
    FeatureCompleted {
        feature: CompletedFeature,
        finished: bool,
    },
}

/// Completed versus total backlog size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    /// Completion ratio (0.0 to 1.0)
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }
}

/// A planning poker session (Aggregate Root)
///
/// # Example
///
/// ```
/// use scrum_poker_domain::{Card, Feature, GameMode, Player, Session};
///
/// let mut session = Session::new();
/// session
///     .start(
///         Player::roster(["A", "B"]).unwrap(),
///         GameMode::Strict,
///         vec![Feature::new("Login", "Sign in form")],
///     )
///     .unwrap();
///
/// session.record_vote("player-0", Card::Five).unwrap();
/// session.record_vote("player-1", Card::Five).unwrap();
///
/// let outcome = session.evaluate_round().unwrap();
/// assert_eq!(outcome.value, Some(Card::Five));
///
/// session.complete_feature(Card::Five).unwrap();
/// assert!(session.is_finished());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub(crate) players: Vec<Player>,
    pub(crate) game_mode: GameMode,
    pub(crate) backlog: Vec<Feature>,
    pub(crate) current_feature_index: usize,
    pub(crate) current_round: u32,
    pub(crate) votes: Votes,
    pub(crate) completed_features: Vec<CompletedFeature>,
    pub(crate) game_started: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            game_mode: GameMode::default(),
            backlog: Vec::new(),
            current_feature_index: 0,
            current_round: 1,
            votes: Votes::new(),
            completed_features: Vec::new(),
            game_started: false,
        }
    }
}

impl Session {
    /// Create an empty session in the setup phase
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Accessors ====================

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn game_mode(&self) -> GameMode {
        self.game_mode
    }

    pub fn backlog(&self) -> &[Feature] {
        &self.backlog
    }

    pub fn current_feature_index(&self) -> usize {
        self.current_feature_index
    }

    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    pub fn votes(&self) -> &Votes {
        &self.votes
    }

    pub fn completed_features(&self) -> &[CompletedFeature] {
        &self.completed_features
    }

    pub fn game_started(&self) -> bool {
        self.game_started
    }

    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    /// The feature currently being estimated, if any
    pub fn current_feature(&self) -> Option<&Feature> {
        self.backlog.get(self.current_feature_index)
    }

    pub fn is_finished(&self) -> bool {
        !self.backlog.is_empty() && self.current_feature_index >= self.backlog.len()
    }

    pub fn phase(&self) -> SessionPhase {
        if self.is_finished() {
            SessionPhase::Finished
        } else if self.game_started && self.current_feature().is_some() {
            SessionPhase::Voting {
                feature_index: self.current_feature_index,
                round: self.current_round,
            }
        } else {
            SessionPhase::Setup
        }
    }

    pub fn progress(&self) -> Progress {
        Progress {
            completed: self.completed_features.len(),
            total: self.backlog.len(),
        }
    }

    pub fn has_voted(&self, player_id: &str) -> bool {
        self.votes.contains(player_id)
    }

    /// Players who have not voted in the current round, in roster order
    pub fn pending_players(&self) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| !self.votes.contains(&p.id))
            .collect()
    }

    pub fn all_voted(&self) -> bool {
        !self.players.is_empty() && self.votes.len() == self.players.len()
    }

    /// Sum of the numeric estimates in the history; special cards count as zero
    pub fn total_points(&self) -> u32 {
        self.completed_features
            .iter()
            .filter_map(|f| f.estimated_difficulty.points())
            .sum()
    }

    // ==================== Setup ====================

    /// Replace the roster
    ///
    /// Votes of players who are no longer in the roster are dropped.
    pub fn set_players(&mut self, players: Vec<Player>) -> Result<(), DomainError> {
        validate_players(&players)?;
        self.votes
            .retain(|id| players.iter().any(|player| player.id == id));
        self.players = players;
        Ok(())
    }

    pub fn set_game_mode(&mut self, mode: GameMode) {
        self.game_mode = mode;
    }

    /// Replace the backlog
    ///
    /// The new backlog cannot be shorter than the part already estimated.
    pub fn set_backlog(&mut self, features: Vec<Feature>) -> Result<(), DomainError> {
        validate_backlog(&features)?;
        if features.len() < self.current_feature_index {
            return Err(DomainError::validation(format!(
                "backlog of {} features is shorter than the {} already estimated",
                features.len(),
                self.current_feature_index
            )));
        }
        self.backlog = features;
        self.discard_votes_outside_voting();
        Ok(())
    }

    /// Open or close voting
    ///
    /// Opening requires a valid roster and backlog. Leaving the voting phase
    /// discards the votes of the interrupted round.
    pub fn set_game_started(&mut self, started: bool) -> Result<(), DomainError> {
        if started {
            validate_players(&self.players)?;
            validate_backlog(&self.backlog)?;
        }
        self.game_started = started;
        self.discard_votes_outside_voting();
        Ok(())
    }

    /// Configure a fresh play-through in one step
    ///
    /// Everything is validated before anything changes; previous progress,
    /// votes and history are discarded.
    pub fn start(
        &mut self,
        players: Vec<Player>,
        mode: GameMode,
        backlog: Vec<Feature>,
    ) -> Result<(), DomainError> {
        validate_players(&players)?;
        validate_backlog(&backlog)?;

        *self = Session {
            players,
            game_mode: mode,
            backlog,
            game_started: true,
            ..Session::default()
        };
        Ok(())
    }

    /// Return to the empty initial state
    pub fn reset_game(&mut self) {
        *self = Session::default();
    }

    // ==================== Voting ====================

    /// Record a player's card for the current round
    ///
    /// Voting again replaces the previous card. Returns the replaced card.
    pub fn record_vote(&mut self, player_id: &str, card: Card) -> Result<Option<Card>, DomainError> {
        self.ensure_voting_open()?;
        if self.player(player_id).is_none() {
            return Err(DomainError::validation(format!(
                "unknown player id: {}",
                player_id
            )));
        }
        Ok(self.votes.cast(player_id, card))
    }

    /// Aggregate the current votes with the default tie-break
    ///
    /// Does not change the session; call [`Session::advance`],
    /// [`Session::next_round`] or [`Session::complete_feature`] afterwards.
    pub fn evaluate_round(&self) -> Result<RoundOutcome, DomainError> {
        self.evaluate_round_with(TieBreak::default())
    }

    pub fn evaluate_round_with(&self, tie_break: TieBreak) -> Result<RoundOutcome, DomainError> {
        aggregate_with(&self.votes, self.game_mode, self.players.len(), tie_break)
    }

    /// Discard the current votes and open the next round on the same feature
    pub fn next_round(&mut self) -> Result<Transition, DomainError> {
        self.ensure_voting_open()?;
        self.votes.clear();
        self.current_round += 1;
        Ok(Transition::RoundAdvanced {
            round: self.current_round,
        })
    }

    /// Record `value` as the estimate of the current feature and move on
    pub fn complete_feature(&mut self, value: Card) -> Result<Transition, DomainError> {
        let Some(feature) = self.current_feature() else {
            return Err(DomainError::state(format!(
                "no feature left to complete ({} of {} estimated)",
                self.completed_features.len(),
                self.backlog.len()
            )));
        };
        let completed = feature.complete(value);

        self.completed_features.push(completed.clone());
        self.current_feature_index += 1;
        self.current_round = 1;
        self.votes.clear();

        Ok(Transition::FeatureCompleted {
            feature: completed,
            finished: self.is_finished(),
        })
    }

    /// Apply an evaluated outcome: complete on consensus, otherwise re-vote
    pub fn advance(&mut self, outcome: RoundOutcome) -> Result<Transition, DomainError> {
        match outcome.accepted_value() {
            Some(value) => {
                self.ensure_voting_open()?;
                self.complete_feature(value)
            }
            None => self.next_round(),
        }
    }

    fn discard_votes_outside_voting(&mut self) {
        if !self.phase().is_voting() {
            self.votes.clear();
        }
    }

    fn ensure_voting_open(&self) -> Result<(), DomainError> {
        match self.phase() {
            SessionPhase::Voting { .. } => Ok(()),
            SessionPhase::Finished => Err(DomainError::state(
                "the session is finished, every feature has been estimated",
            )),
            SessionPhase::Setup => Err(DomainError::state(
                "the session has not started, set players and backlog first",
            )),
        }
    }
}

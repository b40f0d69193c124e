//! Run Session use case
//!
//! Drives a planning poker play-through on top of the domain [`Session`]:
//! applies the configured tie-break, records session events, and handles
//! snapshot save/restore without ever leaving a half-loaded session behind.

use crate::config::SessionParams;
use crate::ports::session_logger::{NoSessionEventLogger, SessionEvent, SessionEventLogger};
use crate::ports::snapshot_store::{SnapshotStore, SnapshotStoreError};
use scrum_poker_domain::{
    Card, DomainError, Feature, GameMode, Player, RoundOutcome, Session, Transition, snapshot,
};
use serde_json::{Value, json};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while running a session
#[derive(Error, Debug)]
pub enum RunSessionError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Snapshot storage failed: {0}")]
    Store(#[from] SnapshotStoreError),

    #[error("No snapshot store configured")]
    NoStore,
}

impl RunSessionError {
    /// The domain error behind this failure, if any
    pub fn domain(&self) -> Option<&DomainError> {
        match self {
            RunSessionError::Domain(err) => Some(err),
            _ => None,
        }
    }
}

/// Use case owning one planning poker session
pub struct RunSessionUseCase {
    session: Session,
    params: SessionParams,
    logger: Arc<dyn SessionEventLogger>,
    store: Option<Box<dyn SnapshotStore>>,
    autosave_error: Option<RunSessionError>,
}

impl RunSessionUseCase {
    pub fn new(params: SessionParams) -> Self {
        Self {
            session: Session::new(),
            params,
            logger: Arc::new(NoSessionEventLogger),
            store: None,
            autosave_error: None,
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_logger(mut self, logger: Arc<dyn SessionEventLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_store(mut self, store: Box<dyn SnapshotStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn params(&self) -> &SessionParams {
        &self.params
    }

    /// The last failed autosave, if any; cleared by this call
    ///
    /// A failed autosave never undoes the transition that triggered it.
    pub fn take_autosave_error(&mut self) -> Option<RunSessionError> {
        self.autosave_error.take()
    }

    fn emit(&self, kind: &'static str, payload: Value) {
        self.logger
            .log(SessionEvent::new(kind, &self.session, payload));
    }

    // ==================== Setup ====================

    /// Start a fresh play-through; `mode` falls back to the configured default
    pub fn start(
        &mut self,
        players: Vec<Player>,
        mode: Option<GameMode>,
        backlog: Vec<Feature>,
    ) -> Result<(), RunSessionError> {
        let mode = mode.unwrap_or(self.params.default_mode);
        self.session.start(players, mode, backlog)?;

        info!(
            "Session started: {} players, {} features, mode {}",
            self.session.players().len(),
            self.session.backlog().len(),
            mode
        );
        self.emit(
            "game_started",
            json!({
                "players": self.session.players(),
                "game_mode": mode,
                "features": self.session.backlog().len(),
            }),
        );
        Ok(())
    }

    /// Start from display names, assigning `player-<index>` ids
    pub fn start_with_names<S: AsRef<str>>(
        &mut self,
        names: &[S],
        mode: Option<GameMode>,
        backlog: Vec<Feature>,
    ) -> Result<(), RunSessionError> {
        let players = Player::roster(names)?;
        self.start(players, mode, backlog)
    }

    pub fn reset(&mut self) {
        self.session.reset_game();
        self.autosave_error = None;
        info!("Session reset");
        self.emit("game_reset", Value::Null);
    }

    // ==================== Rounds ====================

    pub fn vote(&mut self, player_id: &str, card: Card) -> Result<(), RunSessionError> {
        let previous = self.session.record_vote(player_id, card)?;

        debug!("Vote from {}: {} (replaced: {:?})", player_id, card, previous);
        self.emit(
            "vote_recorded",
            json!({ "player_id": player_id, "card": card }),
        );
        Ok(())
    }

    /// Vote with a card given as text, e.g. from a prompt
    pub fn vote_label(&mut self, player_id: &str, label: &str) -> Result<(), RunSessionError> {
        let card: Card = label.trim().parse()?;
        self.vote(player_id, card)
    }

    /// Aggregate the current round with the configured tie-break
    pub fn evaluate(&self) -> Result<RoundOutcome, RunSessionError> {
        let outcome = self.session.evaluate_round_with(self.params.tie_break)?;

        info!(
            "Round {} evaluated in {} mode: {}",
            self.session.current_round(),
            self.session.game_mode(),
            outcome
        );
        self.emit(
            "round_evaluated",
            json!({ "votes": self.session.votes(), "outcome": outcome }),
        );
        Ok(outcome)
    }

    /// Complete the feature on consensus, otherwise open a new round
    pub fn advance(&mut self, outcome: RoundOutcome) -> Result<Transition, RunSessionError> {
        let transition = self.session.advance(outcome)?;
        self.after_transition(&transition);
        Ok(transition)
    }

    /// Record a value chosen by the facilitator for the current feature
    pub fn complete_with(&mut self, value: Card) -> Result<Transition, RunSessionError> {
        let transition = self.session.complete_feature(value)?;
        self.after_transition(&transition);
        Ok(transition)
    }

    pub fn next_round(&mut self) -> Result<Transition, RunSessionError> {
        let transition = self.session.next_round()?;
        self.after_transition(&transition);
        Ok(transition)
    }

    /// Log the transition and autosave completed features
    ///
    /// The session has already moved on here, so a failed save is kept for
    /// [`take_autosave_error`](Self::take_autosave_error) instead of failing
    /// the call.
    fn after_transition(&mut self, transition: &Transition) {
        match transition {
            Transition::RoundAdvanced { round } => {
                info!("No consensus, opening round {}", round);
                self.emit("round_advanced", Value::Null);
            }
            Transition::FeatureCompleted { feature, finished } => {
                info!(
                    "Feature '{}' estimated at {}",
                    feature.name, feature.estimated_difficulty
                );
                self.emit(
                    "feature_completed",
                    json!({ "feature": feature, "finished": finished }),
                );
                if *finished {
                    info!(
                        "Session finished: {} features, {} points",
                        self.session.completed_features().len(),
                        self.session.total_points()
                    );
                }
                if self.params.autosave
                    && self.store.is_some()
                    && let Err(e) = self.save()
                {
                    warn!("Autosave failed: {}", e);
                    self.autosave_error = Some(e);
                }
            }
        }
    }

    // ==================== Snapshots ====================

    pub fn snapshot(&self) -> Result<Vec<u8>, RunSessionError> {
        Ok(snapshot::serialize(&self.session)?)
    }

    /// Replace the session with a decoded snapshot
    ///
    /// The snapshot is fully validated first; on error the current session is
    /// left untouched.
    pub fn restore(&mut self, bytes: &[u8]) -> Result<(), RunSessionError> {
        let restored = match snapshot::deserialize(bytes) {
            Ok(session) => session,
            Err(err) => {
                warn!("Rejected snapshot: {}", err);
                return Err(err.into());
            }
        };

        self.session = restored;
        info!(
            "Session restored: feature {}/{}, round {}",
            self.session.current_feature_index(),
            self.session.backlog().len(),
            self.session.current_round()
        );
        self.emit(
            "game_restored",
            json!({ "finished": self.session.is_finished() }),
        );
        Ok(())
    }

    pub fn save(&self) -> Result<(), RunSessionError> {
        let store = self.store.as_ref().ok_or(RunSessionError::NoStore)?;
        let bytes = self.snapshot()?;
        store.save(&bytes)?;

        info!("Snapshot saved to {}", store.location());
        self.emit("game_saved", json!({ "location": store.location() }));
        Ok(())
    }

    pub fn load(&mut self) -> Result<(), RunSessionError> {
        let store = self.store.as_ref().ok_or(RunSessionError::NoStore)?;
        let bytes = store.load()?;
        self.restore(&bytes)
    }

    /// The downloadable results projection as JSON
    pub fn export_results(&self) -> Result<Vec<u8>, RunSessionError> {
        Ok(snapshot::serialize_results(&self.session.export_results())?)
    }
}

//! Port for the session transcript.
//!
//! Every state change of a play-through is reported as a [`SessionEvent`]
//! stamped with the [`EventPosition`] it left the session at, so a transcript
//! can be replayed feature by feature and round by round.
//!
//! Operational diagnostics stay on `tracing`; this port is the
//! machine-readable record of the game itself.

use scrum_poker_domain::Session;
use serde::Serialize;
use serde_json::Value;

/// Feature and round the session is at after an event was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventPosition {
    pub feature_index: usize,
    pub round: u32,
}

impl EventPosition {
    pub fn of(session: &Session) -> Self {
        Self {
            feature_index: session.current_feature_index(),
            round: session.current_round(),
        }
    }
}

/// One entry of the session transcript
#[derive(Debug, Clone)]
pub struct SessionEvent {
    /// Event kind, e.g. `vote_recorded` or `feature_completed`
    pub kind: &'static str,
    pub position: EventPosition,
    /// Kind-specific details; `Value::Null` when there are none
    pub payload: Value,
}

impl SessionEvent {
    pub fn new(kind: &'static str, session: &Session, payload: Value) -> Self {
        Self {
            kind,
            position: EventPosition::of(session),
            payload,
        }
    }
}

/// Sink for session events.
///
/// Logging is synchronous and infallible: a broken transcript must never
/// interrupt the game.
pub trait SessionEventLogger: Send + Sync {
    fn log(&self, event: SessionEvent);
}

/// Discards every event.
pub struct NoSessionEventLogger;

impl SessionEventLogger for NoSessionEventLogger {
    fn log(&self, _event: SessionEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrum_poker_domain::{Card, Feature, GameMode, Player};

    #[test]
    fn test_event_captures_session_position() {
        let mut session = Session::new();
        session
            .start(
                Player::roster(["Alice"]).unwrap(),
                GameMode::Strict,
                vec![Feature::new("Login", ""), Feature::new("Search", "")],
            )
            .unwrap();
        session.complete_feature(Card::Two).unwrap();
        session.next_round().unwrap();

        let event = SessionEvent::new("round_advanced", &session, Value::Null);
        assert_eq!(
            event.position,
            EventPosition {
                feature_index: 1,
                round: 2
            }
        );
    }
}

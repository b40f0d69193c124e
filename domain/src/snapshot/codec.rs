//! Snapshot encoding and decoding

use super::document::SnapshotDocument;
use crate::core::error::DomainError;
use crate::session::export::ResultsExport;
use crate::session::store::Session;

/// Encode the full session as pretty-printed JSON
///
/// Field order follows the session layout and votes keep their casting
/// order, so the same session always encodes to the same bytes.
pub fn serialize(session: &Session) -> Result<Vec<u8>, DomainError> {
    Ok(serde_json::to_vec_pretty(session)?)
}

/// Decode and validate a session snapshot
///
/// Returns [`DomainError::Format`] when the bytes are not a snapshot document
/// and [`DomainError::Validation`] when the document breaks a session rule.
///
/// # Example
///
/// ```
/// use scrum_poker_domain::{Session, snapshot};
///
/// let session = Session::new();
/// let bytes = snapshot::serialize(&session).unwrap();
/// assert_eq!(snapshot::deserialize(&bytes).unwrap(), session);
///
/// assert!(snapshot::deserialize(b"{}").unwrap_err().is_format());
/// ```
pub fn deserialize(bytes: &[u8]) -> Result<Session, DomainError> {
    let document: SnapshotDocument = serde_json::from_slice(bytes)?;
    Session::try_from(document)
}

/// Encode the results projection as pretty-printed JSON
pub fn serialize_results(results: &ResultsExport) -> Result<Vec<u8>, DomainError> {
    Ok(serde_json::to_vec_pretty(results)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consensus::GameMode;
    use crate::core::card::Card;
    use crate::session::entities::{Feature, Player};
    use serde_json::{Value, json};

    fn started_session() -> Session {
        let mut session = Session::new();
        session
            .start(
                Player::roster(["Alice", "Bob", "Chloé"]).unwrap(),
                GameMode::AbsoluteMajority,
                vec![
                    Feature::new("Login", "Sign in form"),
                    Feature::new("Dashboard", "Statistics"),
                    Feature::new("API", "REST endpoints"),
                ],
            )
            .unwrap();
        session
    }

    fn snapshot_json() -> Value {
        json!({
            "players": [
                {"id": "player-0", "name": "Alice"},
                {"id": "player-1", "name": "Bob"}
            ],
            "gameMode": "strict",
            "backlog": [
                {"name": "Login", "description": "Sign in form"},
                {"name": "Dashboard", "description": "Statistics"}
            ],
            "currentFeatureIndex": 1,
            "currentRound": 2,
            "votes": {"player-1": "8"},
            "completedFeatures": [
                {"name": "Login", "description": "Sign in form", "estimatedDifficulty": "5"}
            ],
            "gameStarted": true
        })
    }

    fn decode(value: &Value) -> Result<Session, DomainError> {
        deserialize(&serde_json::to_vec(value).unwrap())
    }

    // ==================== Round trip ====================

    #[test]
    fn test_round_trip_through_a_play_through() {
        let mut session = started_session();
        let mut checkpoints = vec![Session::new(), session.clone()];

        session.record_vote("player-2", Card::Coffee).unwrap();
        session.record_vote("player-0", Card::Thirteen).unwrap();
        checkpoints.push(session.clone());

        session.next_round().unwrap();
        session.record_vote("player-1", Card::Unknown).unwrap();
        checkpoints.push(session.clone());

        session.complete_feature(Card::Eight).unwrap();
        checkpoints.push(session.clone());

        session.complete_feature(Card::One).unwrap();
        session.complete_feature(Card::TwentyOne).unwrap();
        checkpoints.push(session.clone());

        for checkpoint in checkpoints {
            let bytes = serialize(&checkpoint).unwrap();
            assert_eq!(deserialize(&bytes).unwrap(), checkpoint);
        }
    }

    #[test]
    fn test_serialize_is_deterministic() {
        let mut session = started_session();
        session.record_vote("player-1", Card::Two).unwrap();
        session.record_vote("player-0", Card::Three).unwrap();

        assert_eq!(serialize(&session).unwrap(), serialize(&session).unwrap());
    }

    #[test]
    fn test_wire_layout() {
        let mut session = started_session();
        session.record_vote("player-1", Card::Eight).unwrap();
        session.record_vote("player-0", Card::Coffee).unwrap();

        let bytes = serialize(&session).unwrap();
        let text = String::from_utf8(bytes.clone()).unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();

        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        let mut expected = vec![
            "backlog",
            "completedFeatures",
            "currentFeatureIndex",
            "currentRound",
            "gameMode",
            "gameStarted",
            "players",
            "votes",
        ];
        let mut sorted = keys.clone();
        sorted.sort();
        expected.sort();
        assert_eq!(sorted, expected);

        assert_eq!(value["gameMode"], "absolute_majority");
        assert_eq!(value["votes"], json!({"player-1": "8", "player-0": "coffee"}));
        assert!(text.find("\"players\"").unwrap() < text.find("\"gameMode\"").unwrap());

        // votes keep casting order, not key order
        let first = text.find("\"player-1\": \"8\"").unwrap();
        let second = text.find("\"player-0\": \"coffee\"").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_decode_hand_written_snapshot() {
        let session = decode(&snapshot_json()).unwrap();
        assert_eq!(session.current_feature().unwrap().name, "Dashboard");
        assert_eq!(session.current_round(), 2);
        assert_eq!(session.votes().get("player-1"), Some(Card::Eight));
        assert_eq!(session.completed_features()[0].estimated_difficulty, Card::Five);
    }

    // ==================== Format errors ====================

    #[test]
    fn test_malformed_json_is_format_error() {
        assert!(deserialize(b"{\"players\": [").unwrap_err().is_format());
        assert!(deserialize(b"[]").unwrap_err().is_format());
    }

    #[test]
    fn test_missing_field_is_format_error() {
        let mut value = snapshot_json();
        value.as_object_mut().unwrap().remove("currentRound");
        assert!(decode(&value).unwrap_err().is_format());
    }

    #[test]
    fn test_wrong_type_is_format_error() {
        let mut value = snapshot_json();
        value["currentFeatureIndex"] = json!(-1);
        assert!(decode(&value).unwrap_err().is_format());
    }

    // ==================== Validation errors ====================

    fn assert_invalid(mutate: impl FnOnce(&mut Value)) {
        let mut value = snapshot_json();
        mutate(&mut value);
        let err = decode(&value).unwrap_err();
        assert!(err.is_validation(), "expected validation error, got {err:?}");
    }

    #[test]
    fn test_unknown_mode_is_validation_error() {
        assert_invalid(|v| v["gameMode"] = json!("unanimous"));
    }

    #[test]
    fn test_index_past_backlog_is_validation_error() {
        assert_invalid(|v| v["currentFeatureIndex"] = json!(3));
    }

    #[test]
    fn test_history_length_mismatch_is_validation_error() {
        assert_invalid(|v| v["completedFeatures"] = json!([]));
    }

    #[test]
    fn test_round_zero_is_validation_error() {
        assert_invalid(|v| v["currentRound"] = json!(0));
    }

    #[test]
    fn test_card_outside_deck_is_validation_error() {
        assert_invalid(|v| v["votes"] = json!({"player-0": "4"}));
        assert_invalid(|v| v["completedFeatures"][0]["estimatedDifficulty"] = json!("100"));
    }

    #[test]
    fn test_vote_from_unknown_player_is_validation_error() {
        assert_invalid(|v| v["votes"] = json!({"player-9": "3"}));
    }

    #[test]
    fn test_duplicate_player_ids_are_validation_error() {
        assert_invalid(|v| v["players"][1]["id"] = json!("player-0"));
    }

    #[test]
    fn test_started_without_players_is_validation_error() {
        assert_invalid(|v| {
            v["players"] = json!([]);
            v["votes"] = json!({});
        });
    }

    #[test]
    fn test_votes_on_finished_session_are_validation_error() {
        assert_invalid(|v| {
            v["currentFeatureIndex"] = json!(2);
            v["completedFeatures"] = json!([
                {"name": "Login", "description": "Sign in form", "estimatedDifficulty": "5"},
                {"name": "Dashboard", "description": "Statistics", "estimatedDifficulty": "3"}
            ]);
        });
    }

    // ==================== Results export ====================

    #[test]
    fn test_serialize_results() {
        let mut session = started_session();
        session.complete_feature(Card::Three).unwrap();

        let bytes = serialize_results(&session.export_results()).unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["gameMode"], "absolute_majority");
        assert_eq!(value["completedFeatures"][0]["estimatedDifficulty"], "3");
        assert!(value.get("players").is_none());
    }
}

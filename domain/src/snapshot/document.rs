//! Raw snapshot document
//!
//! Mirrors the JSON layout exactly, with enums and cards kept as strings so
//! that a well-formed but semantically wrong snapshot is reported as a
//! validation error instead of a parse error.

use crate::consensus::{GameMode, Votes};
use crate::core::card::Card;
use crate::core::error::DomainError;
use crate::session::entities::{CompletedFeature, Feature, Player, validate_backlog, validate_players};
use crate::session::store::Session;
use indexmap::IndexMap;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SnapshotDocument {
    pub players: Vec<Player>,
    pub game_mode: String,
    pub backlog: Vec<Feature>,
    pub current_feature_index: usize,
    pub current_round: u32,
    pub votes: IndexMap<String, String>,
    pub completed_features: Vec<RawCompletedFeature>,
    pub game_started: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawCompletedFeature {
    pub name: String,
    pub description: String,
    pub estimated_difficulty: String,
}

impl TryFrom<SnapshotDocument> for Session {
    type Error = DomainError;

    fn try_from(doc: SnapshotDocument) -> Result<Self, Self::Error> {
        let game_mode: GameMode = doc.game_mode.parse()?;

        if doc.current_round < 1 {
            return Err(DomainError::validation("currentRound must be at least 1"));
        }

        if doc.game_started {
            validate_players(&doc.players)?;
            validate_backlog(&doc.backlog)?;
        } else if !doc.players.is_empty() {
            validate_players(&doc.players)?;
        }

        if doc.current_feature_index > doc.backlog.len() {
            return Err(DomainError::validation(format!(
                "currentFeatureIndex {} is past the end of a backlog of {}",
                doc.current_feature_index,
                doc.backlog.len()
            )));
        }

        if doc.completed_features.len() != doc.current_feature_index {
            return Err(DomainError::validation(format!(
                "{} completed features recorded but currentFeatureIndex is {}",
                doc.completed_features.len(),
                doc.current_feature_index
            )));
        }

        let completed_features = doc
            .completed_features
            .into_iter()
            .map(|raw| {
                Ok(CompletedFeature {
                    estimated_difficulty: raw.estimated_difficulty.parse::<Card>()?,
                    name: raw.name,
                    description: raw.description,
                })
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        let mut votes = Votes::new();
        for (player_id, value) in doc.votes {
            if !doc.players.iter().any(|p| p.id == player_id) {
                return Err(DomainError::validation(format!(
                    "vote from unknown player id: {}",
                    player_id
                )));
            }
            votes.cast(player_id, value.parse::<Card>()?);
        }

        let session = Session {
            players: doc.players,
            game_mode,
            backlog: doc.backlog,
            current_feature_index: doc.current_feature_index,
            current_round: doc.current_round,
            votes,
            completed_features,
            game_started: doc.game_started,
        };

        if !session.votes.is_empty() && !session.phase().is_voting() {
            return Err(DomainError::validation(format!(
                "votes are recorded while the session is in the {} phase",
                session.phase()
            )));
        }

        Ok(session)
    }
}

//! Session domain entities

use crate::core::card::Card;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A participant of the estimation session (Entity)
///
/// The id is stable for the lifetime of the session and is the key used in
/// the vote map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Build a roster from display names, assigning `player-<index>` ids
    ///
    /// # Example
    ///
    /// ```
    /// use scrum_poker_domain::Player;
    ///
    /// let players = Player::roster(["Alice", " Bob "]).unwrap();
    /// assert_eq!(players[1].id, "player-1");
    /// assert_eq!(players[1].name, "Bob");
    ///
    /// assert!(Player::roster(["Alice", "  "]).is_err());
    /// ```
    pub fn roster<I, S>(names: I) -> Result<Vec<Player>, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let players: Vec<Player> = names
            .into_iter()
            .enumerate()
            .map(|(index, name)| Player::new(format!("player-{}", index), name.as_ref().trim()))
            .collect();
        validate_players(&players)?;
        Ok(players)
    }
}

/// Check the roster rules: at least one player, unique ids, no blank names
pub fn validate_players(players: &[Player]) -> Result<(), DomainError> {
    if players.is_empty() {
        return Err(DomainError::validation("at least one player is required"));
    }

    let mut seen = HashSet::new();
    for (index, player) in players.iter().enumerate() {
        if player.id.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "player #{} has an empty id",
                index + 1
            )));
        }
        if player.name.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "player #{} has an empty name",
                index + 1
            )));
        }
        if !seen.insert(player.id.as_str()) {
            return Err(DomainError::validation(format!(
                "duplicate player id: {}",
                player.id
            )));
        }
    }

    Ok(())
}

/// A backlog item awaiting estimation (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Feature {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Turn this feature into a history entry with its accepted estimate
    pub fn complete(&self, estimated_difficulty: Card) -> CompletedFeature {
        CompletedFeature {
            name: self.name.clone(),
            description: self.description.clone(),
            estimated_difficulty,
        }
    }
}

/// Check the backlog rules: at least one feature, no blank names
pub fn validate_backlog(features: &[Feature]) -> Result<(), DomainError> {
    if features.is_empty() {
        return Err(DomainError::validation("the backlog cannot be empty"));
    }

    if let Some(index) = features.iter().position(|f| f.name.trim().is_empty()) {
        return Err(DomainError::validation(format!(
            "feature #{} has an empty name",
            index + 1
        )));
    }

    Ok(())
}

/// A feature with an accepted estimate, stored in the session history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedFeature {
    pub name: String,
    pub description: String,
    pub estimated_difficulty: Card,
}

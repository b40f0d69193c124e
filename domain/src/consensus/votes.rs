//! Vote map for the current round
//!
//! Votes are keyed by player id and keep the order in which players first
//! voted. Re-voting replaces the card but keeps the player's position, which
//! matters for the relative majority tie-break.

use crate::core::card::Card;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Cards cast in the current round, keyed by player id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Votes {
    cards: IndexMap<String, Card>,
}

impl Votes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a card for a player, returning the card it replaced
    pub fn cast(&mut self, player_id: impl Into<String>, card: Card) -> Option<Card> {
        self.cards.insert(player_id.into(), card)
    }

    pub fn get(&self, player_id: &str) -> Option<Card> {
        self.cards.get(player_id).copied()
    }

    pub fn contains(&self, player_id: &str) -> bool {
        self.cards.contains_key(player_id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Keep only the votes of players matching `keep`, preserving order
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.cards.retain(|player_id, _| keep(player_id));
    }

    /// Iterate over `(player_id, card)` in voting order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Card)> {
        self.cards.iter().map(|(id, card)| (id.as_str(), *card))
    }

    /// Cards in voting order
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.values().copied()
    }

    /// Numeric weights of the cards, special tokens skipped
    pub fn points(&self) -> Vec<u32> {
        self.cards().filter_map(|card| card.points()).collect()
    }

    /// Every recorded vote asks for a break
    pub fn is_coffee_break(&self) -> bool {
        !self.is_empty() && self.cards().all(|card| card.is_coffee())
    }

    /// Count occurrences of each card, in order of first appearance
    pub fn tally(&self) -> IndexMap<Card, usize> {
        let mut counts = IndexMap::new();
        for card in self.cards() {
            *counts.entry(card).or_insert(0) += 1;
        }
        counts
    }
}

impl<K: Into<String>> FromIterator<(K, Card)> for Votes {
    fn from_iter<I: IntoIterator<Item = (K, Card)>>(iter: I) -> Self {
        let mut votes = Votes::new();
        for (player_id, card) in iter {
            votes.cast(player_id, card);
        }
        votes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revote_keeps_position() {
        let mut votes = Votes::new();
        votes.cast("a", Card::Three);
        votes.cast("b", Card::Five);
        let previous = votes.cast("a", Card::Eight);

        assert_eq!(previous, Some(Card::Three));
        assert_eq!(votes.len(), 2);
        let order: Vec<_> = votes.iter().collect();
        assert_eq!(order, vec![("a", Card::Eight), ("b", Card::Five)]);
    }

    #[test]
    fn test_points_skip_tokens() {
        let votes: Votes = [
            ("a", Card::Three),
            ("b", Card::Unknown),
            ("c", Card::Coffee),
            ("d", Card::Thirteen),
        ]
        .into_iter()
        .collect();

        assert_eq!(votes.points(), vec![3, 13]);
    }

    #[test]
    fn test_coffee_break() {
        let mut votes: Votes = [("a", Card::Coffee), ("b", Card::Coffee)].into_iter().collect();
        assert!(votes.is_coffee_break());

        votes.cast("c", Card::Two);
        assert!(!votes.is_coffee_break());

        assert!(!Votes::new().is_coffee_break());
    }

    #[test]
    fn test_tally_in_first_appearance_order() {
        let votes: Votes = [
            ("a", Card::Five),
            ("b", Card::Three),
            ("c", Card::Five),
        ]
        .into_iter()
        .collect();

        let tally: Vec<_> = votes.tally().into_iter().collect();
        assert_eq!(tally, vec![(Card::Five, 2), (Card::Three, 1)]);
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let votes: Votes = [("player-1", Card::Two), ("player-0", Card::Coffee)]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&votes).unwrap();
        assert_eq!(json, r#"{"player-1":"2","player-0":"coffee"}"#);
    }
}

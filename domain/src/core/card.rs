//! Card value object for the planning poker deck

use super::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A card from the fixed planning poker deck (Value Object)
///
/// The deck holds eight numeric cards and two special tokens. Special tokens
/// count as a cast vote but carry no numeric weight.
///
/// # Example
///
/// ```
/// use scrum_poker_domain::Card;
///
/// let card: Card = "13".parse().unwrap();
/// assert_eq!(card, Card::Thirteen);
/// assert_eq!(card.points(), Some(13));
///
/// assert_eq!(Card::Coffee.points(), None);
/// assert!("4".parse::<Card>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Card {
    Zero,
    One,
    Two,
    Three,
    Five,
    Eight,
    Thirteen,
    TwentyOne,
    /// "?" - the player cannot estimate
    Unknown,
    /// "coffee" - the player asks for a break
    Coffee,
}

impl Card {
    /// The full deck, in display order
    pub const DECK: [Card; 10] = [
        Card::Zero,
        Card::One,
        Card::Two,
        Card::Three,
        Card::Five,
        Card::Eight,
        Card::Thirteen,
        Card::TwentyOne,
        Card::Unknown,
        Card::Coffee,
    ];

    /// The numeric cards only, ascending
    pub const NUMERIC: [Card; 8] = [
        Card::Zero,
        Card::One,
        Card::Two,
        Card::Three,
        Card::Five,
        Card::Eight,
        Card::Thirteen,
        Card::TwentyOne,
    ];

    /// Get the wire representation of this card
    pub fn as_str(&self) -> &'static str {
        match self {
            Card::Zero => "0",
            Card::One => "1",
            Card::Two => "2",
            Card::Three => "3",
            Card::Five => "5",
            Card::Eight => "8",
            Card::Thirteen => "13",
            Card::TwentyOne => "21",
            Card::Unknown => "?",
            Card::Coffee => "coffee",
        }
    }

    /// Numeric weight of the card, `None` for special tokens
    pub fn points(&self) -> Option<u32> {
        match self {
            Card::Zero => Some(0),
            Card::One => Some(1),
            Card::Two => Some(2),
            Card::Three => Some(3),
            Card::Five => Some(5),
            Card::Eight => Some(8),
            Card::Thirteen => Some(13),
            Card::TwentyOne => Some(21),
            Card::Unknown | Card::Coffee => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.points().is_some()
    }

    pub fn is_coffee(&self) -> bool {
        matches!(self, Card::Coffee)
    }

    /// Wire representations of the whole deck
    pub fn deck_labels() -> Vec<&'static str> {
        Self::DECK.iter().map(Card::as_str).collect()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::DECK
            .iter()
            .find(|card| card.as_str() == s)
            .copied()
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "'{}' is not a card of the deck. Valid: {}",
                    s,
                    Self::deck_labels().join(", ")
                ))
            })
    }
}

impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

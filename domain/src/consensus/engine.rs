//! Vote aggregation
//!
//! Turns the votes of one round into a [`RoundOutcome`] according to the
//! configured [`GameMode`]. Aggregation is pure: the same votes, mode and
//! player count always give the same outcome.
//!
//! `"?"` and `"coffee"` are first-class values for strict and majority modes
//! and are left out of average and median computations.

use super::mode::{GameMode, TieBreak};
use super::outcome::RoundOutcome;
use super::votes::Votes;
use crate::core::card::Card;
use crate::core::error::DomainError;

/// Aggregate a round of votes, snapping computed estimates with the default tie-break
///
/// # Example
///
/// ```
/// use scrum_poker_domain::{Card, GameMode, Votes, aggregate};
///
/// let votes: Votes = [("a", Card::Three), ("b", Card::Three), ("c", Card::Five)]
///     .into_iter()
///     .collect();
///
/// let outcome = aggregate(&votes, GameMode::AbsoluteMajority, 3).unwrap();
/// assert!(outcome.consensus);
/// assert_eq!(outcome.value, Some(Card::Three));
///
/// let outcome = aggregate(&votes, GameMode::Strict, 3).unwrap();
/// assert!(!outcome.consensus);
/// ```
pub fn aggregate(
    votes: &Votes,
    mode: GameMode,
    player_count: usize,
) -> Result<RoundOutcome, DomainError> {
    aggregate_with(votes, mode, player_count, TieBreak::default())
}

/// Aggregate a round of votes with an explicit tie-break for computed estimates
pub fn aggregate_with(
    votes: &Votes,
    mode: GameMode,
    player_count: usize,
    tie_break: TieBreak,
) -> Result<RoundOutcome, DomainError> {
    if votes.is_empty() {
        return Err(DomainError::validation(
            "cannot evaluate a round without any vote",
        ));
    }
    if votes.len() > player_count {
        return Err(DomainError::validation(format!(
            "{} votes recorded for {} players",
            votes.len(),
            player_count
        )));
    }

    match mode {
        GameMode::Strict => Ok(strict(votes)),
        GameMode::Average => {
            let points = numeric_points(votes, mode)?;
            let mean = points.iter().map(|p| f64::from(*p)).sum::<f64>() / points.len() as f64;
            Ok(RoundOutcome::reached(snap_to_deck(mean, tie_break)))
        }
        GameMode::Median => {
            let points = numeric_points(votes, mode)?;
            Ok(RoundOutcome::reached(snap_to_deck(median(points), tie_break)))
        }
        GameMode::AbsoluteMajority => Ok(absolute_majority(votes, player_count)),
        GameMode::RelativeMajority => Ok(relative_majority(votes)),
    }
}

/// Snap a computed estimate to the nearest numeric card
///
/// ```
/// use scrum_poker_domain::{Card, TieBreak, snap_to_deck};
///
/// assert_eq!(snap_to_deck(6.0, TieBreak::Lower), Card::Five);
/// assert_eq!(snap_to_deck(4.0, TieBreak::Lower), Card::Three);
/// assert_eq!(snap_to_deck(4.0, TieBreak::Higher), Card::Five);
/// ```
pub fn snap_to_deck(estimate: f64, tie_break: TieBreak) -> Card {
    let mut best = Card::NUMERIC[0];
    let mut best_distance = f64::INFINITY;

    // NUMERIC is ascending, so keeping the first minimum favours the lower card
    for card in Card::NUMERIC {
        let Some(points) = card.points() else {
            continue;
        };
        let distance = (f64::from(points) - estimate).abs();
        let closer = match tie_break {
            TieBreak::Lower => distance < best_distance,
            TieBreak::Higher => distance <= best_distance,
        };
        if closer {
            best = card;
            best_distance = distance;
        }
    }

    best
}

fn strict(votes: &Votes) -> RoundOutcome {
    let mut cards = votes.cards();
    match cards.next() {
        Some(first) if cards.all(|card| card == first) => RoundOutcome::reached(first),
        _ => RoundOutcome::no_consensus(),
    }
}

fn absolute_majority(votes: &Votes, player_count: usize) -> RoundOutcome {
    votes
        .tally()
        .into_iter()
        .find(|(_, count)| count * 2 > player_count)
        .map(|(card, _)| RoundOutcome::reached(card))
        .unwrap_or_else(RoundOutcome::no_consensus)
}

fn relative_majority(votes: &Votes) -> RoundOutcome {
    let mut winner: Option<(Card, usize)> = None;

    // Strict comparison keeps the earliest card on ties
    for (card, count) in votes.tally() {
        if winner.is_none_or(|(_, best)| count > best) {
            winner = Some((card, count));
        }
    }

    winner
        .map(|(card, _)| RoundOutcome::reached(card))
        .unwrap_or_else(RoundOutcome::no_consensus)
}

fn numeric_points(votes: &Votes, mode: GameMode) -> Result<Vec<u32>, DomainError> {
    let points = votes.points();
    if points.is_empty() {
        return Err(DomainError::aggregation(format!(
            "{} mode needs at least one numeric vote, got only special cards",
            mode
        )));
    }
    Ok(points)
}

fn median(mut points: Vec<u32>) -> f64 {
    points.sort_unstable();
    let mid = points.len() / 2;
    if points.len() % 2 == 0 {
        f64::from(points[mid - 1] + points[mid]) / 2.0
    } else {
        f64::from(points[mid])
    }
}

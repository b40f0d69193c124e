//! Closing a round once the table has voted

use scrum_poker_application::{RunSessionError, RunSessionUseCase};
use scrum_poker_domain::{DomainError, RoundOutcome, Transition, Votes};

/// What happened when the loop tried to close the current round
#[derive(Debug)]
pub enum RoundClose {
    /// Somebody still has to vote
    Pending,
    /// Everybody played coffee: a fresh round is open and the snapshot was saved if possible
    CoffeeBreak {
        transition: Transition,
        saved: Result<(), RunSessionError>,
    },
    /// The votes were revealed and the outcome applied
    Revealed {
        votes: Votes,
        outcome: RoundOutcome,
        transition: Transition,
    },
    /// Nothing could be computed from the cards on the table; a fresh round is open
    Revote {
        reason: DomainError,
        transition: Transition,
    },
}

/// Close the current round if every player has voted
pub fn close_round(use_case: &mut RunSessionUseCase) -> Result<RoundClose, RunSessionError> {
    let session = use_case.session();
    if !session.all_voted() {
        return Ok(RoundClose::Pending);
    }

    if session.votes().is_coffee_break() {
        let transition = use_case.next_round()?;
        let saved = use_case.save();
        return Ok(RoundClose::CoffeeBreak { transition, saved });
    }

    let votes = session.votes().clone();
    match use_case.evaluate() {
        Ok(outcome) => {
            let transition = use_case.advance(outcome)?;
            Ok(RoundClose::Revealed {
                votes,
                outcome,
                transition,
            })
        }
        Err(RunSessionError::Domain(reason)) if reason.is_aggregation() => {
            let transition = use_case.next_round()?;
            Ok(RoundClose::Revote { reason, transition })
        }
        Err(e) => Err(e),
    }
}

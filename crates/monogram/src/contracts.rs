//! Contract-based validation for glyph placement.
//!
//! Contracts define correctness through preconditions and postconditions,
//! formalizing the Hoare-style reasoning: {P} action {Q}

use crate::action::PlaceError;
use crate::invariants::{InvariantSet, MatchInvariants};
use crate::position::Position;
use crate::typestate::MatchInProgress;
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying the action
/// - Postcondition: {Q(before, after)} - must hold after applying the action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), PlaceError>;

    /// Checks postconditions after applying the action.
    ///
    /// This verifies that the transition maintained system invariants.
    fn post(before: &S, after: &S) -> Result<(), PlaceError>;
}

/// Precondition: the target cell must be empty.
///
/// The acting seat is implied by the match state, so no wrong-player
/// precondition exists — there is nothing else to check before a placement.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Checks that the cell at `position` is unoccupied.
    #[instrument(skip(game))]
    pub fn check(position: Position, game: &MatchInProgress) -> Result<(), PlaceError> {
        if !game.board().is_empty(position) {
            Err(PlaceError::CellOccupied(position))
        } else {
            Ok(())
        }
    }
}

/// Contract for placements.
///
/// Precondition:
/// - Cell must be empty
///
/// Postconditions:
/// - Board remains monotonic
/// - Seats still alternate
/// - Cursors remain consistent with history and monograms
pub struct PlaceContract;

impl Contract<MatchInProgress, Position> for PlaceContract {
    fn pre(game: &MatchInProgress, position: &Position) -> Result<(), PlaceError> {
        CellIsEmpty::check(*position, game)
    }

    fn post(_before: &MatchInProgress, after: &MatchInProgress) -> Result<(), PlaceError> {
        MatchInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            PlaceError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typestate::{MatchSetup, MatchTransition};

    fn live_match() -> MatchInProgress {
        MatchSetup::new()
            .start("Ann Lee", "Bob")
            .expect("valid names")
    }

    #[test]
    fn test_precondition_empty_cell() {
        let game = live_match();
        assert!(PlaceContract::pre(&game, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let game = live_match();

        if let Ok(MatchTransition::InProgress(game)) = game.place(Position::Center) {
            assert!(matches!(
                PlaceContract::pre(&game, &Position::Center),
                Err(PlaceError::CellOccupied(Position::Center))
            ));
        } else {
            panic!("Expected in-progress match");
        }
    }

    #[test]
    fn test_postcondition_holds_after_placement() {
        let game = live_match();

        if let Ok(MatchTransition::InProgress(after)) = game.clone().place(Position::Center) {
            assert!(PlaceContract::post(&game, &after).is_ok());
        } else {
            panic!("Expected in-progress match");
        }
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        use crate::types::{Seat, Square};

        let game = live_match();

        if let Ok(MatchTransition::InProgress(mut after)) = game.clone().place(Position::Center) {
            // Corrupt the board behind the engine's back.
            after.board.set(
                Position::TopLeft,
                Square::Marked {
                    glyph: 'Z',
                    owner: Seat::B,
                },
            );

            assert!(PlaceContract::post(&game, &after).is_err());
        } else {
            panic!("Expected in-progress match");
        }
    }
}

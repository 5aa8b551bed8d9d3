//! Alternating seat invariant: placements alternate A, B, A, B, ...

use super::Invariant;
use crate::types::Seat;
use crate::typestate::MatchInProgress;

/// Invariant: seats alternate turns.
///
/// Move history must show A, B, A, B, ... with seat A first, and `to_move`
/// must agree with the history length.
pub struct AlternatingSeatInvariant;

impl Invariant<MatchInProgress> for AlternatingSeatInvariant {
    fn holds(game: &MatchInProgress) -> bool {
        let history = game.history();

        if let Some(first) = history.first()
            && first.seat != Seat::A
        {
            return false;
        }

        for window in history.windows(2) {
            if window[0].seat == window[1].seat {
                return false;
            }
        }

        let expected_next = if history.len() % 2 == 0 {
            Seat::A
        } else {
            Seat::B
        };

        game.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Seats alternate turns (A, B, A, B, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typestate::{MatchSetup, MatchTransition};
    use crate::Position;

    #[test]
    fn test_fresh_match_holds() {
        let game = MatchSetup::new().start("Ann Lee", "Bob").unwrap();
        assert!(AlternatingSeatInvariant::holds(&game));
        assert_eq!(game.to_move(), Seat::A);
    }

    #[test]
    fn test_single_placement_holds() {
        let game = MatchSetup::new().start("Ann Lee", "Bob").unwrap();

        if let Ok(MatchTransition::InProgress(game)) = game.place(Position::Center) {
            assert!(AlternatingSeatInvariant::holds(&game));
            assert_eq!(game.to_move(), Seat::B);
        } else {
            panic!("Expected in-progress match");
        }
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let positions = [
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
        ];

        if let Ok(MatchTransition::InProgress(game)) =
            MatchInProgress::replay("Ann Lee", "Bob", &positions)
        {
            assert!(AlternatingSeatInvariant::holds(&game));
            assert_eq!(game.to_move(), Seat::A);
        } else {
            panic!("Expected in-progress match");
        }
    }
}

//! Monotonic board invariant: cells never change once marked.

use super::Invariant;
use crate::types::{Board, Square};
use crate::typestate::MatchInProgress;

/// Invariant: board cells are monotonic (never overwritten).
///
/// Once a cell transitions from empty to marked, its glyph and owner never
/// change. Verified by replaying the move history into a fresh board and
/// comparing — which also confirms that glyph and ownership were recorded
/// together for every placement.
pub struct MonotonicBoardInvariant;

impl Invariant<MatchInProgress> for MonotonicBoardInvariant {
    fn holds(game: &MatchInProgress) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            // Cell must be empty before placing.
            if reconstructed.get(mov.position) != Square::Empty {
                return false;
            }

            reconstructed.set(
                mov.position,
                Square::Marked {
                    glyph: mov.glyph,
                    owner: mov.seat,
                },
            );
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

//! Cursor consistency invariant: cursors and glyphs agree with history.

use super::Invariant;
use crate::types::Seat;
use crate::typestate::MatchInProgress;

/// Invariant: turn cursors are consistent with the move history.
///
/// Each seat's cursor equals the number of moves that seat has made, and
/// the glyph of a seat's k-th move is `monogram[k mod len]`. No placement
/// skips or repeats a cursor step.
pub struct CursorConsistentInvariant;

impl Invariant<MatchInProgress> for CursorConsistentInvariant {
    fn holds(game: &MatchInProgress) -> bool {
        for seat in [Seat::A, Seat::B] {
            let player = game.players().seat(seat);
            let moves: Vec<_> = game.history().iter().filter(|m| m.seat == seat).collect();

            if player.cursor() != moves.len() {
                return false;
            }

            for (k, mov) in moves.iter().enumerate() {
                if mov.glyph != player.monogram().glyph_at(k) {
                    return false;
                }
            }
        }

        true
    }

    fn description() -> &'static str {
        "Turn cursors and placed glyphs are consistent with history"
    }
}

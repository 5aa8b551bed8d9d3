//! Draw detection.

use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if every cell is occupied.
///
/// A full board with no winning window is a draw. Callers must evaluate the
/// win rule first: the move that fills the last cell can still win.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

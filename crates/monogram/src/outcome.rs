//! Match outcome for finished games.

use crate::position::Position;
use crate::types::Seat;
use serde::{Deserialize, Serialize};

/// Outcome of a finished match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A seat aligned a permutation of its monogram.
    Winner {
        /// The winning seat.
        seat: Seat,
        /// Cells of the matched window, in line order.
        cells: Vec<Position>,
    },
    /// The board filled with no winning window.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Seat> {
        match self {
            Outcome::Winner { seat, .. } => Some(*seat),
            Outcome::Draw => None,
        }
    }

    /// Returns the winning cells, empty for a draw.
    pub fn winning_cells(&self) -> &[Position] {
        match self {
            Outcome::Winner { cells, .. } => cells,
            Outcome::Draw => &[],
        }
    }

    /// Returns true if the match was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner { seat, .. } => write!(f, "{} wins", seat),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

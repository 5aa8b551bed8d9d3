//! First-class move records and engine errors.
//!
//! Placements are domain events, not side effects. The record carries the
//! glyph that was stamped so a match can be replayed without recomputing
//! cursor state.

use crate::position::Position;
use crate::types::Seat;
use serde::{Deserialize, Serialize};

/// One accepted placement: a seat stamping a glyph at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The seat making the move.
    pub seat: Seat,
    /// The cell the glyph was placed in.
    pub position: Position,
    /// The character that was placed.
    pub glyph: char,
}

impl Move {
    /// Creates a new move record.
    pub fn new(seat: Seat, position: Position, glyph: char) -> Self {
        Self {
            seat,
            position,
            glyph,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}' -> {}", self.seat, self.glyph, self.position.label())
    }
}

/// Error that can occur when validating or applying a placement.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// The target cell is already occupied.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for PlaceError {}

/// Error that can occur when starting a match.
///
/// This is the only user-facing validation condition in the engine: a name
/// must yield a monogram before the match can begin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum StartError {
    /// The seat's name was empty or whitespace-only.
    #[display("{} must enter a name", _0)]
    BlankName(Seat),
}

impl std::error::Error for StartError {}

/// Error surfaced by the phase wrapper when applying moves.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum MatchError {
    /// The match could not be started during replay.
    #[display("{}", _0)]
    Start(StartError),

    /// A placement was rejected.
    #[display("{}", _0)]
    Place(PlaceError),

    /// No match has been started yet.
    #[display("Match hasn't started yet")]
    NotStarted,

    /// The match has already concluded.
    #[display("Match is already over")]
    MatchOver,
}

impl std::error::Error for MatchError {}
